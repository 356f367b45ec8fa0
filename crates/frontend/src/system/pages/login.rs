use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::{api_base, ApiClient};
use crate::shared::in_flight::InFlight;
use crate::system::auth::{api, context::complete_login, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let submitting = InFlight::new();

    let auth_state = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(guard) = submitting.try_begin() else {
            return;
        };

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        error_message.set(None);

        spawn_local(async move {
            let _guard = guard;
            let client = ApiClient::new(api_base(), None);
            match api::login(&client, username_val, password_val).await {
                // Switching the auth state swaps the shell to the main layout
                Ok(response) => complete_login(auth_state, response),
                Err(e) => {
                    log::error!("Login failed: {}", e);
                    let _ = error_message.try_set(Some(format!("Login failed: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"AquaBill"</h1>
                <h2>"Sign in to the billing console"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            required
                            disabled=move || submitting.is_busy()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || submitting.is_busy()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || submitting.is_busy()
                    >
                        {move || if submitting.is_busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
