//! HTTP client for the StoryLand REST API
//!
//! Single point of request construction and cross-cutting response handling.
//! Every request that finds a stored, unexpired credential carries an
//! `Authorization: Bearer` header; a missing credential never blocks or fails
//! a request.
//!
//! Authorization failures (401) are mapped to [`ApiError::AuthExpired`] and
//! returned to the caller. This layer never clears state or navigates; the
//! page layer reacts through [`crate::state::session::expire_session`], which
//! keeps navigation out of networking code and the behavior testable.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::auth::ErrorDetail;
use web_sys::FormData;

use crate::utils::constants::api_base;
use crate::utils::storage;

/// Failure modes of a single API call. No call is retried; every error is
/// terminal for the action that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request could not be sent or no response arrived
    Network(String),
    /// The server rejected the bearer credential (401)
    AuthExpired,
    /// Any other non-2xx status; `detail` is the server's error body when
    /// it provides one
    Api { status: u16, detail: String },
    /// 2xx response with a body that did not match the expected DTO
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::AuthExpired => write!(f, "Your session has expired"),
            ApiError::Api { detail, .. } => write!(f, "{detail}"),
            ApiError::Decode(msg) => write!(f, "Unexpected server response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Value for the `Authorization` header, or `None` when no credential is
/// stored (the header is then omitted entirely, not sent empty).
fn bearer(token: Option<String>) -> Option<String> {
    token.map(|token| format!("Bearer {token}"))
}

/// Classify a non-2xx response from its status and raw body.
fn error_for_status(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::AuthExpired;
    }
    let detail = serde_json::from_str::<ErrorDetail>(body)
        .map(|err| err.detail)
        .unwrap_or_else(|_| format!("Request failed with status {status}"));
    ApiError::Api { status, detail }
}

/// Configured API client bound to one origin
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(api_base())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Attach the bearer credential when one is stored and unexpired.
    fn decorate(builder: RequestBuilder) -> RequestBuilder {
        match bearer(storage::load_token()) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::decorate(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        read_json(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Self::decorate(Request::post(&self.url(path)))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        read_json(response).await
    }

    /// POST with an empty body (toggle and cancel style endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::decorate(Request::post(&self.url(path)))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        read_json(response).await
    }

    /// POST a multipart form (the login endpoint's OAuth2 password grant).
    /// The browser supplies the multipart content type and boundary.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let response = Self::decorate(Request::post(&self.url(path)))
            .body(form)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_for_status(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_omitted_without_token() {
        assert_eq!(bearer(None), None);
        assert_eq!(
            bearer(Some("abc123".to_string())),
            Some("Bearer abc123".to_string())
        );
    }

    #[test]
    fn test_401_maps_to_auth_expired() {
        // 401 always means expired authorization, whatever the body says
        assert_eq!(
            error_for_status(401, r#"{"detail": "Not authenticated"}"#),
            ApiError::AuthExpired
        );
        assert_eq!(error_for_status(401, ""), ApiError::AuthExpired);
    }

    #[test]
    fn test_server_detail_surfaces_verbatim() {
        let err = error_for_status(400, r#"{"detail": "Email already registered"}"#);
        assert_eq!(
            err,
            ApiError::Api {
                status: 400,
                detail: "Email already registered".to_string()
            }
        );
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_unparseable_error_body_falls_back_to_status() {
        let err = error_for_status(500, "<html>Internal Server Error</html>");
        assert_eq!(
            err,
            ApiError::Api {
                status: 500,
                detail: "Request failed with status 500".to_string()
            }
        );
    }

    #[test]
    fn test_url_join() {
        let client = ApiClient::with_base_url("http://localhost:8000/");
        assert_eq!(client.url("/stories/"), "http://localhost:8000/stories/");
        assert_eq!(client.url("users/me"), "http://localhost:8000/users/me");
    }
}
