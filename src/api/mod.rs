//! MMIS REST Client
//!
//! Thin wrappers over the backend endpoints, organized by domain.

mod alerts;
mod auth;
mod employees;
mod fixtures;
mod inventory;
mod transactions;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub use alerts::*;
pub use auth::*;
pub use employees::*;
pub use fixtures::*;
pub use inventory::*;
pub use transactions::*;

/// Errors that can occur when talking to the MMIS backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{}", .detail.as_deref().unwrap_or("Request failed"))]
    Status { status: u16, detail: Option<String> },
    #[error("Session expired")]
    Unauthorized,
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Browser error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Backend `detail` message, if the server sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// `detail` when present, otherwise the fallback text
    pub fn detail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.detail().unwrap_or(fallback)
    }
}

/// FastAPI error bodies look like `{"detail": "..."}` or `{"detail": [{"msg": ...}]}`
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Array(errors) => {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        other => Some(other.to_string()),
    }
}

/// Backend client bound to a base URL and (optionally) a bearer token.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode the JSON body.
    async fn send<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R, ApiError> {
        let response = self.authorized(request).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_detail(&body);
            log::warn!("{} {}", status, detail.as_deref().unwrap_or("(no detail)"));
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<R, ApiError> {
        log::debug!("GET {}", path);
        self.send(self.client.get(self.url(path)).query(query)).await
    }

    pub(crate) async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        log::debug!("POST {}", path);
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    pub(crate) async fn put<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        log::debug!("PUT {}", path);
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    pub(crate) async fn post_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<R, ApiError> {
        log::debug!("POST {} (multipart)", path);
        self.send(self.client.post(self.url(path)).multipart(form)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_string() {
        assert_eq!(
            extract_detail(r#"{"detail": "Not enough stock"}"#).as_deref(),
            Some("Not enough stock")
        );
    }

    #[test]
    fn test_extract_detail_validation_list() {
        let body = r#"{"detail": [{"loc": ["body", "quantity"], "msg": "field required"}]}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("field required"));
        assert_eq!(extract_detail("<html>bad gateway</html>"), None);
    }

    #[test]
    fn test_status_error_display_uses_detail() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("Item not found".to_string()),
        };
        assert_eq!(err.to_string(), "Item not found");
        assert_eq!(err.detail_or("fallback"), "Item not found");
        assert_eq!(ApiError::Unauthorized.detail_or("fallback"), "fallback");
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8000/", None);
        assert_eq!(client.url("/inventory/"), "http://localhost:8000/inventory/");
    }
}
