use crate::{
    api::{
        ApiClient, ApiError, Employee, EmployeeStatus, LeaveAction, LeaveRequest, NewEmployee,
    },
    state::session::Session,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct HrRepository {
    client: Rc<ApiClient>,
}

impl Default for HrRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl HrRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self, session: &Session) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees(session).await
    }

    pub async fn fetch_leaves(&self, session: &Session) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_leaves(session).await
    }

    pub async fn add_employee(
        &self,
        session: &Session,
        payload: &NewEmployee,
    ) -> Result<Option<String>, ApiError> {
        self.client.add_employee(session, payload).await
    }

    pub async fn delete_employee(&self, session: &Session, id: &str) -> Result<(), ApiError> {
        self.client.delete_employee(session, id).await
    }

    pub async fn update_status(
        &self,
        session: &Session,
        id: &str,
        status: EmployeeStatus,
    ) -> Result<(), ApiError> {
        self.client.set_employee_status(session, id, status).await
    }

    pub async fn decide_leave(
        &self,
        session: &Session,
        id: &str,
        action: LeaveAction,
    ) -> Result<(), ApiError> {
        self.client.act_on_leave(session, id, action).await
    }
}
