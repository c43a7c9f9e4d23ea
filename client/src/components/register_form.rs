//! Account registration form, shared by the public register page and the
//! admin user list.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use leptos::prelude::*;
use model::{Credentials, RegisteredUser, Registration, Role};

use crate::config::ClientConfig;
use crate::state::auth::AuthState;

pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed, user may already exist.";
pub const MISSING_FIELDS_MESSAGE: &str = "Enter both username and password.";

/// Validate raw inputs into a registration body.
pub fn registration_input(username: &str, password: &str, role: Role) -> Result<Registration, &'static str> {
    let credentials = Credentials::normalized(username, password).ok_or(MISSING_FIELDS_MESSAGE)?;
    Ok(Registration { username: credentials.username, password: credentials.password, role })
}

/// `admin` routes the request through `/admin/register` with the caller's token.
#[component]
pub fn RegisterForm(admin: bool, on_registered: Callback<RegisteredUser>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::User);
    let busy = RwSignal::new(false);
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match registration_input(&username.get_untracked(), &password.get_untracked(), role.get_untracked()) {
            Ok(registration) => registration,
            Err(e) => {
                message.set(e.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::util::auth::session_api(auth, config);
            let result = if admin {
                api.admin_register(&registration).await
            } else {
                api.register(&registration).await
            };
            busy.set(false);
            match result {
                Ok(user) => {
                    username.set(String::new());
                    password.set(String::new());
                    on_registered.run(user);
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    if admin {
                        crate::util::auth::handle_api_error(auth, &e);
                    }
                    message.set(REGISTER_FAILED_MESSAGE.to_owned());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (registration, auth, config, admin, on_registered);
    };

    view! {
        <form class="register-form" on:submit=on_submit>
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
            <select
                class="login-input"
                on:change=move |ev| role.set(event_target_value(&ev).parse().unwrap_or_default())
            >
                {Role::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option value=option.as_str() selected=move || role.get() == option>
                                {option.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button class="login-button" type="submit" disabled=move || busy.get()>
                {if admin { "Add User" } else { "Register" }}
            </button>
            <Show when=move || !message.get().is_empty()>
                <p class="login-message">{move || message.get()}</p>
            </Show>
        </form>
    }
}
