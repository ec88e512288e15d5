use leptos::prelude::*;
use leptos::task::spawn_local;
use site_core::task::latency;

use super::session::use_admin_session;
use crate::browser::delay::{simulate, token_of, use_task_guard};

#[component]
pub fn AdminLogin() -> impl IntoView {
    let session = use_admin_session();
    let guard = use_task_guard();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        error.set(None);
        let token = token_of(guard);
        spawn_local(async move {
            if simulate(&token, latency::LOGIN_MS).await.is_err() {
                return;
            }
            submitting.set(false);
            if session.login(&email.get_untracked(), &password.get_untracked()) {
                password.set(String::new());
            } else {
                error.set(Some("Invalid email or password"));
            }
        });
    };

    view! {
        <div class="admin-login">
            <form class="admin-login-card" on:submit=on_submit>
                <h1>"Admin Login"</h1>
                <p class="admin-login-hint">"Demo accounts: admin@, editor@ or contributor@example.com"</p>
                <label>
                    "Email"
                    <input type="email" required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input type="password" required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
