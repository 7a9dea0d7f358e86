//! REST API Clients
//!
//! HTTP bindings to the todo backend, organized by domain. Shared plumbing
//! lives here: the error taxonomy, response checking, and the abort guard
//! that scopes in-flight requests to the initiating view.

mod auth;
mod todos;

pub use auth::*;
pub use todos::*;

use gloo_net::http::Response;
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use web_sys::{AbortController, AbortSignal};

use crate::token::DecodeError;

/// Client-level bound on any single request
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Typed outcome of any API call; never thrown past the view boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response received (offline, refused connection, abort)
    #[error("could not reach the server")]
    Network,
    /// 401: rejected credentials or an expired/invalid token
    #[error("{0}")]
    Unauthorized(String),
    /// Other 4xx with a field-level cause (e.g. empty title)
    #[error("{0}")]
    Validation(String),
    /// 5xx or a response of unexpected shape
    #[error("{0}")]
    Server(String),
    /// Malformed token payload
    #[error("{0}")]
    Decode(String),
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Error body shape shared by the backend variants: a human-readable
/// `detail` (sometimes structured) or `message` field.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

pub(crate) fn error_message(body: ErrorBody) -> Option<String> {
    match body.detail {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Null) | None => body.message,
        // Structured validation detail; surface it verbatim
        Some(other) => Some(other.to_string()),
    }
}

/// Map a non-success status plus optional server message to a typed error
pub(crate) fn error_from_status(status: u16, message: Option<String>) -> ApiError {
    match status {
        401 => ApiError::Unauthorized(message.unwrap_or_else(|| "Authentication required".into())),
        400..=499 => ApiError::Validation(message.unwrap_or_else(|| "Request rejected".into())),
        _ => ApiError::Server(message.unwrap_or_else(|| format!("Server error ({status})"))),
    }
}

/// Check a response's status, extracting the server's error message on
/// failure; on success, hand the response back for body parsing.
pub(crate) async fn check(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp.json::<ErrorBody>().await.ok().and_then(error_message);
    Err(error_from_status(status, message))
}

/// Parse a success body, treating shape mismatches as server errors
pub(crate) async fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json()
        .await
        .map_err(|_| ApiError::Server("Unexpected response shape".into()))
}

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Scopes a request to the view that issued it.
///
/// Dropping the guard aborts the underlying fetch, so registering it with
/// `on_cleanup` abandons in-flight requests on unmount. The built-in
/// timeout bounds hangs at [`REQUEST_TIMEOUT_MS`].
pub struct AbortGuard {
    controller: AbortController,
    _timeout: Timeout,
}

impl AbortGuard {
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT_MS)
    }

    pub fn with_timeout(ms: u32) -> Self {
        let controller =
            AbortController::new().expect("AbortController is available in the browser");
        let aborter = controller.clone();
        let timeout = Timeout::new(ms, move || aborter.abort());
        Self {
            controller,
            _timeout: timeout,
        }
    }

    pub fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }
}

impl Default for AbortGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AbortGuard {
    fn drop(&mut self) {
        self.controller.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_maps_to_unauthorized_with_server_text() {
        let err = error_from_status(401, Some("Invalid credentials".into()));
        assert_eq!(err, ApiError::Unauthorized("Invalid credentials".into()));
    }

    #[test]
    fn status_401_without_body_gets_generic_text() {
        assert_eq!(
            error_from_status(401, None),
            ApiError::Unauthorized("Authentication required".into())
        );
    }

    #[test]
    fn status_422_maps_to_validation() {
        let err = error_from_status(422, Some("title must not be empty".into()));
        assert_eq!(err, ApiError::Validation("title must not be empty".into()));
    }

    #[test]
    fn status_500_maps_to_server() {
        assert_eq!(
            error_from_status(500, None),
            ApiError::Server("Server error (500)".into())
        );
    }

    #[test]
    fn error_message_prefers_string_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"Invalid credentials","message":"ignored"}"#)
                .unwrap();
        assert_eq!(error_message(body).as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn error_message_falls_back_to_message_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert_eq!(error_message(body).as_deref(), Some("nope"));
    }

    #[test]
    fn structured_detail_is_surfaced_verbatim() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"msg":"field required"}]}"#).unwrap();
        assert_eq!(
            error_message(body).as_deref(),
            Some(r#"[{"msg":"field required"}]"#)
        );
    }

    #[test]
    fn decode_error_converts_into_api_error() {
        let err: ApiError = crate::token::DecodeError::Base64.into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
