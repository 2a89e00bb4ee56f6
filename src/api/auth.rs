//! Login

use mmis_core::models::{LoginRequest, LoginResponse};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Exchange credentials for a bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post("/auth/login", &body).await?;
        Ok(response.access_token)
    }
}
