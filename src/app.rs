//! Todo Frontend App
//!
//! Root component: owns the page-level state machine and restores a
//! persisted session on mount.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortGuard, ApiError, AuthClient};
use crate::components::{Dashboard, ErrorBanner, LoginForm, SignupForm};
use crate::config::api_base_url;
use crate::context::{AppContext, Phase};
use crate::session::{BrowserSession, SessionStore};
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(AppState::default());
    provide_context(store);

    let (phase, set_phase) = signal(Phase::Restoring);
    let ctx = AppContext::new(
        (phase, set_phase),
        Rc::new(BrowserSession) as Rc<dyn SessionStore>,
        store,
    );
    provide_context(ctx);

    // Validate any persisted token on mount; requests abort on teardown
    let guard = StoredValue::new_local(AbortGuard::new());
    let abort = guard.with_value(|g| g.signal());
    on_cleanup(move || guard.dispose());

    Effect::new(move |_| {
        let abort = abort.clone();
        spawn_local(async move {
            let Some(token) = ctx.session().token() else {
                ctx.show(Phase::Login);
                return;
            };
            let auth = AuthClient::new(api_base_url());
            match auth.resolve_identity(&token, Some(&abort)).await {
                Ok(user) => {
                    web_sys::console::log_1(
                        &format!("[APP] Restored session for user {}", user.id).into(),
                    );
                    store.user().set(Some(user));
                    ctx.show(Phase::Dashboard);
                }
                Err(err @ ApiError::Network) => {
                    // Keep the token so a retry can succeed once the
                    // backend is reachable again.
                    ctx.show(Phase::Login);
                    ctx.fail(err.to_string());
                }
                Err(_) => {
                    ctx.session().clear();
                    ctx.show(Phase::Login);
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <ErrorBanner />
            {move || match phase.get() {
                Phase::Restoring => view! { <div class="loading">"Loading..."</div> }.into_any(),
                Phase::Login => view! { <LoginForm /> }.into_any(),
                Phase::Signup => view! { <SignupForm /> }.into_any(),
                Phase::Dashboard => view! { <Dashboard /> }.into_any(),
            }}
        </div>
    }
}
