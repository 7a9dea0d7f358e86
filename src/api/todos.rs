//! Todo Client
//!
//! CRUD calls scoped to the authenticated user. Every request carries the
//! bearer header; holding a valid token is the caller's precondition.

use gloo_net::http::Request;
use web_sys::AbortSignal;

use super::{bearer, check, parse_json, ApiError};
use crate::models::{NewTodo, Todo, TodoPatch};

/// Client for the authenticated todo endpoints
#[derive(Debug, Clone)]
pub struct TodoClient {
    base: String,
    token: String,
}

impl TodoClient {
    pub fn new(base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            token: token.into(),
        }
    }

    pub async fn list(&self, signal: Option<&AbortSignal>) -> Result<Vec<Todo>, ApiError> {
        let resp = Request::get(&format!("{}/todos/", self.base))
            .header("Authorization", &bearer(&self.token))
            .abort_signal(signal)
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        parse_json(check(resp).await?).await
    }

    /// Create a todo; the server assigns `id`, `completed` and `created_at`
    pub async fn create(
        &self,
        input: &NewTodo<'_>,
        signal: Option<&AbortSignal>,
    ) -> Result<Todo, ApiError> {
        if input.title.trim().is_empty() {
            return Err(ApiError::Validation("Title must not be empty".into()));
        }
        let resp = Request::post(&format!("{}/todos/", self.base))
            .header("Authorization", &bearer(&self.token))
            .abort_signal(signal)
            .json(input)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        parse_json(check(resp).await?).await
    }

    /// Partial update; fields left unset in the patch are unchanged
    pub async fn update(
        &self,
        id: u32,
        patch: &TodoPatch<'_>,
        signal: Option<&AbortSignal>,
    ) -> Result<Todo, ApiError> {
        let resp = Request::put(&format!("{}/todos/{id}", self.base))
            .header("Authorization", &bearer(&self.token))
            .abort_signal(signal)
            .json(patch)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        parse_json(check(resp).await?).await
    }

    /// Flip `completed` via the dedicated toggle endpoint
    pub async fn toggle(&self, id: u32, signal: Option<&AbortSignal>) -> Result<Todo, ApiError> {
        let resp = Request::patch(&format!("{}/todos/{id}/toggle", self.base))
            .header("Authorization", &bearer(&self.token))
            .abort_signal(signal)
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        parse_json(check(resp).await?).await
    }

    pub async fn delete(&self, id: u32, signal: Option<&AbortSignal>) -> Result<(), ApiError> {
        let resp = Request::delete(&format!("{}/todos/{id}", self.base))
            .header("Authorization", &bearer(&self.token))
            .abort_signal(signal)
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        check(resp).await?;
        Ok(())
    }
}
