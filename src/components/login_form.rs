//! Login Form Component
//!
//! Username/password form. Shown whenever the session context is empty;
//! a successful login initializes the session and the app swaps back to
//! the dashboard reactively.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::session::use_session;

#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            set_error.set("Username and password are required".to_string());
            return;
        }
        set_error.set(String::new());
        set_loading.set(true);

        spawn_local(async move {
            if let Err(err) = api::login(session, &user, &pass).await {
                web_sys::console::error_1(&format!("[LOGIN] Failed: {}", err).into());
                set_error.set(err.to_string());
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Sales & Costing – Login"</h2>
                <form on:submit=on_submit>
                    <div class="field">
                        <label>"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || !error.get().is_empty()>
                        <div class="error-message">{move || error.get()}</div>
                    </Show>
                    <button type="submit" class="btn btn-primary login-submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
