//! Signup Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortGuard, AuthClient};
use crate::config::api_base_url;
use crate::context::{AppContext, Phase};
use crate::models::Credentials;

#[component]
pub fn SignupForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if password.get() != confirm.get() {
            ctx.fail("Passwords do not match");
            return;
        }
        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };
        set_busy.set(true);
        ctx.clear_error();

        spawn_local(async move {
            let guard = AbortGuard::new();
            let client = AuthClient::new(api_base_url());
            match client.signup(&credentials, Some(&guard.signal())).await {
                // start_session unmounts this form; leave busy alone
                Ok(auth) => ctx.start_session(auth),
                Err(err) => {
                    ctx.fail(err.to_string());
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-card">
            <h2>"Sign Up"</h2>
            <form on:submit=on_submit>
                <label>"Email"</label>
                <input
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <label>"Password"</label>
                <input
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <label>"Confirm password"</label>
                <input
                    type="password"
                    required
                    prop:value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <button type="button" on:click=move |_| {
                    ctx.clear_error();
                    ctx.show(Phase::Login);
                }>
                    "Login"
                </button>
            </p>
        </div>
    }
}
