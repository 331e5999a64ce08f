use crate::api::{ApiClient, ApiError, Credentials, LoginResponse};
use std::rc::Rc;

use super::utils::PortalMode;

#[derive(Clone)]
pub struct AuthRepository {
    client: Rc<ApiClient>,
}

impl Default for AuthRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create_hr_account(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<String>, ApiError> {
        self.client.hr_signup(credentials).await
    }

    pub async fn login(
        &self,
        mode: PortalMode,
        credentials: &Credentials,
    ) -> Result<LoginResponse, ApiError> {
        match mode {
            PortalMode::Hr => self.client.hr_login(credentials).await,
            PortalMode::Employee => self.client.employee_login(credentials).await,
        }
    }
}
