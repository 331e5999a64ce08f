use crate::{
    api::{ApiClient, ApiError, Employee, LeaveRequest, NewLeaveRequest},
    state::session::Session,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeeRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_profile(&self, session: &Session) -> Result<Employee, ApiError> {
        self.client.get_employee_profile(session).await
    }

    pub async fn fetch_history(&self, session: &Session) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.get_leave_history(session).await
    }

    pub async fn submit_leave(
        &self,
        session: &Session,
        payload: &NewLeaveRequest,
    ) -> Result<(), ApiError> {
        self.client.submit_leave_request(session, payload).await
    }
}
