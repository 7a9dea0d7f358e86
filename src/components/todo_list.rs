//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.todos().get()
                // Key on every mutable field so in-place edits re-render the row
                key=|todo| (
                    todo.id,
                    todo.completed,
                    todo.title.clone(),
                    todo.description.clone(),
                )
                children=move |todo| view! { <TodoItem todo /> }
            />
            <Show when=move || store.todos().read().is_empty()>
                <li class="empty-state">"No todos yet."</li>
            </Show>
        </ul>
    }
}
