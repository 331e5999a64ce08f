use super::{
    client::ApiClient,
    types::{success_message, ApiError, Credentials, LoginResponse},
};

impl ApiClient {
    /// Creates an HR account. Returns the server's confirmation message, if any.
    pub async fn hr_signup(&self, credentials: &Credentials) -> Result<Option<String>, ApiError> {
        let url = self.endpoint("/hr/signup").await;
        let response = self
            .send(self.http_client().post(&url).json(credentials))
            .await?;
        let body = Self::read_success_body(response).await?;
        Ok(success_message(&body))
    }

    pub async fn hr_login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.login_at("/hr/login", credentials).await
    }

    pub async fn employee_login(
        &self,
        credentials: &Credentials,
    ) -> Result<LoginResponse, ApiError> {
        self.login_at("/employee/login", credentials).await
    }

    async fn login_at(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint(path).await;
        let response = self
            .send(self.http_client().post(&url).json(credentials))
            .await?;
        Self::parse_json(response).await
    }
}
