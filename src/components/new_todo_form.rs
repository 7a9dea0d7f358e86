//! New Todo Form Component
//!
//! Creation form. The server-returned todo is authoritative (id,
//! created_at), so the local insert happens on confirmation rather than
//! optimistically.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortGuard, TodoClient};
use crate::cache::Patch;
use crate::config::api_base_url;
use crate::context::AppContext;
use crate::models::NewTodo;
use crate::store::{store_apply, use_app_store};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        if title_value.trim().is_empty() {
            ctx.fail("Title must not be empty");
            return;
        }
        let description_value = description.get();
        ctx.clear_error();

        spawn_local(async move {
            let guard = AbortGuard::new();
            let Some(token) = ctx.session().token() else {
                ctx.logout();
                return;
            };
            let client = TodoClient::new(api_base_url(), token);
            let input = NewTodo {
                title: title_value.trim(),
                description: match description_value.trim() {
                    "" => None,
                    d => Some(d),
                },
            };
            match client.create(&input, Some(&guard.signal())).await {
                Ok(created) => {
                    store_apply(&store, Patch::Insert(created));
                    set_title.set(String::new());
                    set_description.set(String::new());
                    ctx.notify("Todo added");
                }
                Err(err) => ctx.handle_api_error(err),
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add a new todo..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
