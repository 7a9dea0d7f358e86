//! Todo Item Component
//!
//! Single row with toggle, inline title editing, and delete. Mutations are
//! applied optimistically and rolled back if the remote call fails.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortGuard, TodoClient};
use crate::cache::Patch;
use crate::config::api_base_url;
use crate::context::AppContext;
use crate::models::{Todo, TodoPatch};
use crate::store::{store_apply, store_reconcile, store_rollback, use_app_store};

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = todo.id;
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(todo.title.clone());

    let todo_toggle = todo.clone();
    let on_toggle = move |_: web_sys::Event| {
        let mut flipped = todo_toggle.clone();
        flipped.completed = !flipped.completed;
        let rb = store_apply(&store, Patch::Update(flipped));
        ctx.clear_error();

        spawn_local(async move {
            let guard = AbortGuard::new();
            let Some(token) = ctx.session().token() else {
                ctx.logout();
                return;
            };
            let client = TodoClient::new(api_base_url(), token);
            match client.toggle(id, Some(&guard.signal())).await {
                Ok(confirmed) => store_reconcile(&store, confirmed),
                Err(err) => {
                    store_rollback(&store, rb);
                    ctx.handle_api_error(err);
                }
            }
        });
    };

    let todo_edit = todo.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_title = draft.get().trim().to_string();
        if new_title.is_empty() {
            ctx.fail("Title must not be empty");
            return;
        }
        let mut edited = todo_edit.clone();
        edited.title = new_title;
        let rb = store_apply(&store, Patch::Update(edited.clone()));
        set_editing.set(false);
        ctx.clear_error();

        spawn_local(async move {
            let guard = AbortGuard::new();
            let Some(token) = ctx.session().token() else {
                ctx.logout();
                return;
            };
            let client = TodoClient::new(api_base_url(), token);
            let patch = TodoPatch {
                title: Some(edited.title.as_str()),
                ..Default::default()
            };
            match client.update(id, &patch, Some(&guard.signal())).await {
                Ok(confirmed) => store_reconcile(&store, confirmed),
                Err(err) => {
                    store_rollback(&store, rb);
                    ctx.handle_api_error(err);
                }
            }
        });
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        let rb = store_apply(&store, Patch::Remove(id));
        ctx.clear_error();

        spawn_local(async move {
            let guard = AbortGuard::new();
            let Some(token) = ctx.session().token() else {
                ctx.logout();
                return;
            };
            let client = TodoClient::new(api_base_url(), token);
            match client.delete(id, Some(&guard.signal())).await {
                Ok(()) => {}
                Err(err) => {
                    store_rollback(&store, rb);
                    ctx.handle_api_error(err);
                }
            }
        });
    };

    let item_class = if todo.completed {
        "todo-item completed"
    } else {
        "todo-item"
    };
    let completed = todo.completed;
    let title = todo.title.clone();
    let description = todo.description.clone();
    // Server timestamps are ISO 8601; the date part is enough here
    let created = todo.created_at.chars().take(10).collect::<String>();

    view! {
        <li class=item_class>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=on_toggle
            />
            {move || if editing.get() {
                view! {
                    <form class="edit-form" on:submit=on_save.clone()>
                        <input
                            type="text"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                        />
                        <button type="submit">"Save"</button>
                        <button type="button" on:click=move |_| set_editing.set(false)>
                            "Cancel"
                        </button>
                    </form>
                }.into_any()
            } else {
                let title = title.clone();
                let description = description.clone();
                let created = created.clone();
                view! {
                    <span class="todo-view">
                        <span class="todo-title" on:dblclick=move |_| set_editing.set(true)>
                            {title}
                        </span>
                        {description.map(|d| view! { <span class="todo-description">{d}</span> })}
                        <span class="todo-date">{created}</span>
                        <button class="edit-btn" on:click=move |_| set_editing.set(true)>
                            "Edit"
                        </button>
                    </span>
                }.into_any()
            }}
            <button class="delete-btn" on:click=on_delete>"×"</button>
        </li>
    }
}
