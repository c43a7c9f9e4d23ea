//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{
    admin::AdminDashboardPage, login::LoginPage, register::RegisterPage, task_detail::TaskDetailPage,
    tasks::TaskListPage, users::UserListPage,
};
use crate::state::auth::AuthState;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and service configuration to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(StoredValue::new(ClientConfig::from_build_env()));

    // Effects only run in the browser, so the server render stays "loading".
    Effect::new(move || auth.set(AuthState::from_token(storage::load_token())));

    view! {
        <Stylesheet id="leptos" href="/pkg/taskboard.css"/>
        <Title text="Task Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("tasks") view=TaskListPage/>
                <Route path=(StaticSegment("tasks"), ParamSegment("id")) view=TaskDetailPage/>
                <Route path=StaticSegment("users") view=UserListPage/>
                <Route path=StaticSegment("admin") view=AdminDashboardPage/>
            </Routes>
        </Router>
    }
}
