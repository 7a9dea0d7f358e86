//! Dashboard Component
//!
//! Authenticated view: header with identity + logout, creation form, and
//! the todo list. Fetches the collection on mount; the fetch is scoped to
//! this view and aborts on teardown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortGuard, TodoClient};
use crate::components::{NewTodoForm, TodoList};
use crate::config::api_base_url;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let guard = StoredValue::new_local(AbortGuard::new());
    let abort = guard.with_value(|g| g.signal());
    on_cleanup(move || guard.dispose());

    // Load todos on mount
    Effect::new(move |_| {
        let abort = abort.clone();
        spawn_local(async move {
            let Some(token) = ctx.session().token() else {
                ctx.logout();
                return;
            };
            let client = TodoClient::new(api_base_url(), token);
            match client.list(Some(&abort)).await {
                Ok(todos) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos", todos.len()).into());
                    store.todos().set(todos);
                }
                Err(err) => ctx.handle_api_error(err),
            }
        });
    });

    let welcome = move || {
        store
            .user()
            .get()
            .map(|user| format!("Welcome, {}", user.email))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"My Todos"</h1>
                <span class="user-info">{welcome}</span>
                <button class="logout-btn" on:click=move |_| ctx.logout()>
                    "Logout"
                </button>
            </header>

            <NewTodoForm />

            <TodoList />

            <p class="item-count">
                {move || {
                    let todos = store.todos().get();
                    let open = todos.iter().filter(|t| !t.completed).count();
                    format!("{} todos, {} open", todos.len(), open)
                }}
            </p>
        </div>
    }
}
