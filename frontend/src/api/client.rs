use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{header::HeaderMap, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::*, config, state::session::Session};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Bearer header for one request. Credentials are never stored on the client.
    pub(crate) fn auth_headers(session: &Session) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", session.token)
                .parse()
                .map_err(|_| ApiError::unauthorized("Invalid token format"))?,
        );
        Ok(headers)
    }

    pub(crate) fn authorized(
        &self,
        builder: RequestBuilder,
        session: &Session,
    ) -> Result<RequestBuilder, ApiError> {
        Ok(builder.headers(Self::auth_headers(session)?))
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::transport(format!("Invalid request: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url().path());

        if let Some(response) = test_dispatch(&request) {
            return response;
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::transport(format!("Request failed: {}", e)))
    }

    /// Reads the body and turns non-2xx statuses into an `ApiError`.
    pub(crate) async fn read_success_body(response: Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(format!("Failed to read response: {}", e)))?;
        if status.is_success() {
            Ok(body)
        } else {
            let error = ApiError::from_response(status.as_u16(), &body);
            log::warn!("Request rejected with {}: {}", status, error.message);
            Err(error)
        }
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = Self::read_success_body(response).await?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
    }

    /// Parses a list endpoint, treating any non-array payload as empty.
    pub(crate) async fn parse_list<T: DeserializeOwned>(
        response: Response,
    ) -> Result<Vec<T>, ApiError> {
        let body = Self::read_success_body(response).await?;
        let value: Value = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body)
                .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))?
        };
        coerce_list(value)
    }

    pub(crate) async fn expect_success(response: Response) -> Result<(), ApiError> {
        Self::read_success_body(response).await.map(|_| ())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn test_dispatch(request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
    mock_transport::dispatch(request)
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn test_dispatch(_request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
    None
}

/// Decodes a list payload item by item. Records that do not match `T` are
/// skipped with a warning; any non-array payload yields an empty list.
pub(crate) fn coerce_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            log::warn!("Expected a JSON array, got {}; using an empty list", type_name(&other));
            return Ok(Vec::new());
        }
    };
    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                log::warn!("Skipping malformed list item {}: {}", index, e);
                None
            }
        })
        .collect();
    if decoded.len() < total {
        log::warn!("Kept {} of {} list items", decoded.len(), total);
    }
    Ok(decoded)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Percent-encodes a single path segment or query value.
pub(crate) fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock_transport::{register_mock, MockResponse, TestResponder};
