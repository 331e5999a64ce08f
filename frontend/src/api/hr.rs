use super::{
    client::{encode_segment, ApiClient},
    types::{
        success_message, ApiError, Employee, EmployeeStatus, LeaveAction, LeaveRequest,
        NewEmployee,
    },
};
use crate::state::session::Session;

impl ApiClient {
    pub async fn list_employees(&self, session: &Session) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/hr/employees").await;
        let response = self
            .send(self.authorized(self.http_client().get(&url), session)?)
            .await?;
        Self::parse_list(response).await
    }

    pub async fn list_leaves(&self, session: &Session) -> Result<Vec<LeaveRequest>, ApiError> {
        let url = self.endpoint("/hr/leaves").await;
        let response = self
            .send(self.authorized(self.http_client().get(&url), session)?)
            .await?;
        Self::parse_list(response).await
    }

    /// Adds an employee under the acting HR user's id.
    pub async fn add_employee(
        &self,
        session: &Session,
        payload: &NewEmployee,
    ) -> Result<Option<String>, ApiError> {
        let url = self
            .endpoint(&format!("/hr/addEmployee/{}", encode_segment(&session.user_id)))
            .await;
        let response = self
            .send(self.authorized(self.http_client().post(&url).json(payload), session)?)
            .await?;
        let body = Self::read_success_body(response).await?;
        Ok(success_message(&body))
    }

    pub async fn delete_employee(&self, session: &Session, id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/hr/delete/{}", encode_segment(id)))
            .await;
        let response = self
            .send(self.authorized(self.http_client().delete(&url), session)?)
            .await?;
        Self::expect_success(response).await
    }

    pub async fn set_employee_status(
        &self,
        session: &Session,
        id: &str,
        status: EmployeeStatus,
    ) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!(
                "/hr/employee/status/{}?status={}",
                encode_segment(id),
                status.as_str()
            ))
            .await;
        let response = self
            .send(self.authorized(self.http_client().put(&url), session)?)
            .await?;
        Self::expect_success(response).await
    }

    pub async fn act_on_leave(
        &self,
        session: &Session,
        id: &str,
        action: LeaveAction,
    ) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!(
                "/hr/leave/{}/{}",
                action.as_str(),
                encode_segment(id)
            ))
            .await;
        let response = self
            .send(self.authorized(self.http_client().put(&url), session)?)
            .await?;
        Self::expect_success(response).await
    }
}
