//! Error Banner Component
//!
//! Non-blocking banners: a dismissible error plus an auto-expiring notice.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.error().get().map(|message| view! {
            <div class="error-banner">
                <span>{message}</span>
                <button
                    class="dismiss-btn"
                    on:click=move |_| store.error().set(None)
                >
                    "×"
                </button>
            </div>
        })}
        {move || store.notice().get().map(|message| view! {
            <div class="notice-banner">{message}</div>
        })}
    }
}
