//! Username + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use model::Credentials;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password.";

/// Validate login inputs before any request goes out.
pub fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    Credentials::normalized(username, password).ok_or("Enter both username and password.")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let navigate = leptos_router::hooks::use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if auth.with(|a| !a.loading && a.session.is_some()) {
                navigate("/tasks", leptos_router::NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(e) => {
                info.set(e.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::Api::new(config.with_value(|c| c.urls.clone()), None);
                let signed_in = match api.login(&credentials).await {
                    Ok(token) => model::Session::from_token(token.access_token).map_err(|e| e.to_string()),
                    Err(e) => Err(e.to_string()),
                };
                busy.set(false);
                match signed_in {
                    Ok(session) => {
                        crate::util::storage::save_token(&session.token);
                        auth.update(|a| a.sign_in(session));
                        navigate("/tasks", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        info.set(LOGIN_FAILED_MESSAGE.to_owned());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, config, &navigate);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Task Manager"</h1>
                <p class="login-card__subtitle">"Login"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? " <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
