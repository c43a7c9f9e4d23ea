//! Admin dashboard: five aggregate feeds, optionally scoped to one user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use model::UpcomingTask;

use crate::components::charts::{BarChart, StatusChart, productivity_bars, progress_bars};
use crate::components::nav_bar::NavBar;
use crate::components::user_card::UserCard;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::dashboard::DashboardState;
use crate::util::auth::{Access, install_auth_redirect};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let dashboard = RwSignal::new(DashboardState::default());
    install_auth_redirect(auth, Access::Admin, use_navigate());

    let load = move || {
        dashboard.update(DashboardState::begin_load);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = dashboard.with_untracked(|d| d.user.clone());
            let result = crate::util::auth::session_api(auth, config)
                .dashboard(user.as_deref())
                .await
                .map_err(|e| crate::util::auth::handle_api_error(auth, &e));
            dashboard.update(|d| d.finish_load(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = config;
    };

    Effect::new(move || {
        if auth.with(|a| !a.loading && a.is_admin()) {
            load();
        }
    });

    let select = move |user: Option<String>| {
        if dashboard.try_update(|d| d.select_user(user)).unwrap_or(false) {
            load();
        }
    };
    let on_select = Callback::new(move |user: String| select(Some(user)));

    let body = move || {
        dashboard.with(|d| {
            if d.loading {
                return view! { <p class="dashboard__status">"Loading dashboard..."</p> }.into_any();
            }
            if let Some(error) = &d.error {
                return view! { <p class="dashboard__status dashboard__status--error">{error.clone()}</p> }.into_any();
            }
            let data = d.data.clone();
            let cards = data
                .user_summary
                .iter()
                .map(|activity| view! { <UserCard activity=activity.clone() on_select=on_select /> })
                .collect_view();
            view! {
                <section class="dashboard__panel">
                    <h2>"Task Status Overview"</h2>
                    <StatusChart dashboard=data.clone() />
                </section>
                <section class="dashboard__panel">
                    <h2>"Productivity Trend"</h2>
                    <BarChart bars=productivity_bars(&data.productivity) empty="No completed tasks yet." />
                </section>
                <section class="dashboard__panel">
                    <h2>"Task Progress Distribution"</h2>
                    <BarChart bars=progress_bars(&data.progress) empty="No progress data." />
                </section>
                <section class="dashboard__panel">
                    <h2>"Upcoming Deadlines"</h2>
                    {upcoming_list(&data.upcoming)}
                </section>
                <section class="dashboard__panel">
                    <h2>"User Activity"</h2>
                    <div class="dashboard__cards">{cards}</div>
                </section>
            }
            .into_any()
        })
    };

    view! {
        <div class="dashboard-page">
            <NavBar />
            <main class="dashboard">
                <div class="dashboard__header">
                    <h1>{move || format!("Admin Dashboard {}", dashboard.with(DashboardState::scope_label))}</h1>
                    <Show when=move || dashboard.with(|d| d.user.is_some())>
                        <button class="btn" on:click=move |_| select(None)>"Show all users"</button>
                    </Show>
                </div>
                {body}
            </main>
        </div>
    }
}

fn upcoming_list(upcoming: &[UpcomingTask]) -> impl IntoView {
    if upcoming.is_empty() {
        return view! { <p class="dashboard__empty">"No upcoming deadlines."</p> }.into_any();
    }
    let items = upcoming
        .iter()
        .map(|task| {
            view! {
                <li>
                    <a href=format!("/tasks/{}", task.id)>{task.title.clone()}</a>
                    <span class="dashboard__due">{task.due_label()}</span>
                </li>
            }
        })
        .collect_view();
    view! { <ul class="dashboard__upcoming">{items}</ul> }.into_any()
}
