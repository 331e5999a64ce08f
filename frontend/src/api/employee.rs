use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, Employee, LeaveRequest, NewLeaveRequest},
};
use crate::state::session::Session;

impl ApiClient {
    pub async fn get_employee_profile(&self, session: &Session) -> Result<Employee, ApiError> {
        let url = self
            .endpoint(&format!("/employee/{}", encode_segment(&session.user_id)))
            .await;
        let response = self
            .send(self.authorized(self.http_client().get(&url), session)?)
            .await?;
        Self::parse_json(response).await
    }

    pub async fn get_leave_history(&self, session: &Session) -> Result<Vec<LeaveRequest>, ApiError> {
        let url = self
            .endpoint(&format!(
                "/employee/leave/history/{}",
                encode_segment(&session.user_id)
            ))
            .await;
        let response = self
            .send(self.authorized(self.http_client().get(&url), session)?)
            .await?;
        Self::parse_list(response).await
    }

    pub async fn submit_leave_request(
        &self,
        session: &Session,
        payload: &NewLeaveRequest,
    ) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/employee/leave/{}", encode_segment(&session.user_id)))
            .await;
        let response = self
            .send(self.authorized(self.http_client().post(&url).json(payload), session)?)
            .await?;
        Self::expect_success(response).await
    }
}
