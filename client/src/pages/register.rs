//! Public account registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use model::RegisteredUser;

use crate::components::register_form::RegisterForm;

pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Please login.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let done = RwSignal::new(false);

    Effect::new(move || {
        if done.get() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_registered = Callback::new(move |user: RegisteredUser| {
        #[cfg(feature = "hydrate")]
        {
            log::info!("registered {} as {}", user.username, user.role);
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(REGISTER_SUCCESS_MESSAGE);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = user;
        done.set(true);
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Task Manager"</h1>
                <p class="login-card__subtitle">"Register"</p>
                <RegisterForm admin=false on_registered=on_registered />
                <Show when=move || done.get()>
                    <p class="login-message">{REGISTER_SUCCESS_MESSAGE}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? " <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
