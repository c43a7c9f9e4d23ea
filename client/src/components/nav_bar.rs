//! Top navigation shown on every signed-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let identity = move || {
        auth.with(|a| match (a.username(), a.role()) {
            (Some(name), Some(role)) => format!("{name} ({role})"),
            _ => String::new(),
        })
    };

    let on_logout = move |_| {
        sign_out(auth);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="nav-bar toolbar">
            <span class="toolbar__title">"Task Manager"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <A href="/tasks">"Tasks"</A>
            <A href="/users">"Users"</A>
            <Show when=move || auth.with(AuthState::is_admin)>
                <A href="/admin">"Dashboard"</A>
            </Show>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">{identity}</span>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
