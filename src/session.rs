//! Session Store
//!
//! Owns the bearer token lifecycle. The trait exists so components and
//! tests can swap the browser-backed store for an in-memory one.

use std::cell::RefCell;

use gloo_storage::{LocalStorage, Storage};

/// Local-storage key holding the bearer token
pub const TOKEN_KEY: &str = "auth_token";

/// Persistent credential store
pub trait SessionStore {
    /// Read the persisted credential, if any
    fn token(&self) -> Option<String>;
    /// Persist the credential; effective for all subsequent requests
    fn set_token(&self, token: &str);
    /// Drop the credential (logout, or auth rejection from any API call)
    fn clear(&self);
}

/// Browser local-storage backed session.
///
/// Storage being unavailable or unreadable is treated as "no session":
/// the app fails open to the logged-out state rather than erroring.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }

    fn set_token(&self, token: &str) {
        let _ = LocalStorage::set(TOKEN_KEY, token);
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}

/// In-memory session for tests
#[derive(Debug, Default)]
pub struct MemorySession(RefCell<Option<String>>);

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_session_round_trip() {
        let session = MemorySession::default();
        assert_eq!(session.token(), None);

        session.set_token("abc123");
        assert_eq!(session.token(), Some("abc123".to_string()));

        session.clear();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn set_overwrites_previous_token() {
        let session = MemorySession::default();
        session.set_token("first");
        session.set_token("second");
        assert_eq!(session.token(), Some("second".to_string()));
    }
}
