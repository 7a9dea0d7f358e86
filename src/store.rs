//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The todo list
//! is a cache of server state; all mutations go through the apply/rollback
//! helpers so failed remote calls can restore the prior local state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cache::{self, Patch, Rollback};
use crate::models::{Todo, UserIdentity};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Identity resolved for the current session (None while logged out)
    pub user: Option<UserIdentity>,
    /// Local cache of the user's todo collection
    pub todos: Vec<Todo>,
    /// Most recent error; replaced by newer errors, cleared on success
    pub error: Option<String>,
    /// Ephemeral success banner
    pub notice: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply an optimistic patch to the cached todos, returning its inverse
pub fn store_apply(store: &AppStore, patch: Patch) -> Rollback {
    cache::apply(&mut store.todos().write(), patch)
}

/// Restore the local state captured when the patch was applied
pub fn store_rollback(store: &AppStore, rb: Rollback) {
    cache::rollback(&mut store.todos().write(), rb);
}

/// Replace a cached todo with the server-confirmed copy
pub fn store_reconcile(store: &AppStore, confirmed: Todo) {
    cache::reconcile(&mut store.todos().write(), confirmed);
}
