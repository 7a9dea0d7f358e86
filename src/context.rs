//! Application Context
//!
//! Page-level state machine and shared session handling, provided via the
//! Leptos Context API.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, AuthSession};
use crate::session::SessionStore;
use crate::store::{AppStore, AppStateStoreFields};

/// How long an ephemeral success banner stays up
pub const NOTICE_TTL_MS: u32 = 3_000;

/// Which page-level view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Checking a persisted token on first paint
    Restoring,
    Login,
    Signup,
    Dashboard,
}

/// Monotonic sequence guarding notice expiry timers.
///
/// Each raised notice gets a fresh id; a timer only clears the banner if
/// its id is still the active one, so a stale timer never cuts a newer
/// notice short (even when both carry the same text).
#[derive(Debug, Default)]
pub struct NoticeSeq(Cell<u64>);

impl NoticeSeq {
    pub fn next(&self) -> u64 {
        let id = self.0.get() + 1;
        self.0.set(id);
        id
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.0.get() == id
    }
}

/// App-wide signals and session handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active page view - read
    pub phase: ReadSignal<Phase>,
    set_phase: WriteSignal<Phase>,
    // Rc is not Send, so the handle lives in the local arena
    session: StoredValue<Rc<dyn SessionStore>, LocalStorage>,
    // Cell is not Sync; same deal
    notice_seq: StoredValue<Rc<NoticeSeq>, LocalStorage>,
    store: AppStore,
}

impl AppContext {
    pub fn new(
        phase: (ReadSignal<Phase>, WriteSignal<Phase>),
        session: Rc<dyn SessionStore>,
        store: AppStore,
    ) -> Self {
        Self {
            phase: phase.0,
            set_phase: phase.1,
            session: StoredValue::new_local(session),
            notice_seq: StoredValue::new_local(Rc::new(NoticeSeq::default())),
            store,
        }
    }

    /// Handle to the injected session store
    pub fn session(&self) -> Rc<dyn SessionStore> {
        self.session.get_value()
    }

    /// Switch the active page view
    pub fn show(&self, phase: Phase) {
        self.set_phase.set(phase);
    }

    /// Persist a fresh credential and enter the dashboard
    pub fn start_session(&self, auth: AuthSession) {
        self.session().set_token(&auth.token);
        self.store.user().set(Some(auth.user));
        self.store.error().set(None);
        self.set_phase.set(Phase::Dashboard);
    }

    /// Drop the credential and all session-scoped state
    pub fn logout(&self) {
        self.session().clear();
        self.store.user().set(None);
        self.store.todos().write().clear();
        self.store.notice().set(None);
        self.set_phase.set(Phase::Login);
    }

    /// Surface an error; the latest message replaces any previous one
    pub fn fail(&self, message: impl Into<String>) {
        self.store.error().set(Some(message.into()));
    }

    pub fn clear_error(&self) {
        self.store.error().set(None);
    }

    /// Show a success banner that expires after [`NOTICE_TTL_MS`]
    pub fn notify(&self, message: impl Into<String>) {
        let store = self.store;
        let seq = self.notice_seq.get_value();
        let id = seq.next();
        store.notice().set(Some(message.into()));
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            // Leave newer notices alone
            if seq.is_current(id) {
                store.notice().set(None);
            }
        });
    }

    /// Route a failed in-session API call.
    ///
    /// An auth rejection or an undecodable token ends the session and drops
    /// back to the login view; everything else is a transient banner.
    pub fn handle_api_error(&self, err: ApiError) {
        match err {
            ApiError::Unauthorized(message) | ApiError::Decode(message) => {
                self.logout();
                self.fail(message);
            }
            other => self.fail(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_timer_does_not_clear_a_newer_notice() {
        let seq = NoticeSeq::default();
        // Two banners raised back to back, e.g. "Todo added" twice
        let first = seq.next();
        let second = seq.next();

        // The first banner's timer fires while the second is showing
        assert!(!seq.is_current(first));
        // Only the second banner's own timer may clear it
        assert!(seq.is_current(second));
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let seq = NoticeSeq::default();
        let a = seq.next();
        let b = seq.next();
        assert!(b > a);
    }
}
