//! Client Configuration
//!
//! The API base URL is parameterized: a local-storage override wins,
//! otherwise the compile-time default is used.

use gloo_storage::{LocalStorage, Storage};

/// Default backend origin + prefix
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api/v1";

/// Local-storage key holding an API base URL override
pub const API_BASE_KEY: &str = "api_base_url";

/// Resolve the API base URL (no trailing slash)
pub fn api_base_url() -> String {
    let base: String = LocalStorage::get(API_BASE_KEY).unwrap_or_else(|_| DEFAULT_API_BASE.into());
    base.trim_end_matches('/').to_string()
}
