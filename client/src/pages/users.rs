//! User list page. Admins can also delete accounts and register new ones.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use model::{RegisteredUser, UserSummary};

use crate::components::nav_bar::NavBar;
use crate::components::register_form::RegisterForm;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::users::UsersState;
use crate::util::auth::{Access, install_auth_redirect};

pub fn deleted_notice(username: &str) -> String {
    format!("Deleted {username} and their tasks.")
}

pub fn registered_notice(user: &RegisteredUser) -> String {
    format!("Registered {} ({}).", user.username, user.role)
}

/// Admins cannot delete their own account from the list.
pub fn can_delete(is_admin: bool, current: Option<&str>, row: &UserSummary) -> bool {
    is_admin && current != Some(row.username.as_str())
}

#[component]
pub fn UserListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let users = RwSignal::new(UsersState::default());
    install_auth_redirect(auth, Access::SignedIn, use_navigate());

    let load = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::util::auth::session_api(auth, config);
            let (list, count) = futures::join!(api.list_users(), api.count_users());
            let list = list.map_err(|e| crate::util::auth::handle_api_error(auth, &e));
            users.update(|u| {
                u.count = count.ok().map(|c| c.count);
                u.finish_load(list);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, config, users);
    };

    Effect::new(move || {
        if auth.with(|a| !a.loading && a.session.is_some()) {
            load();
        }
    });

    let is_admin = Memo::new(move |_| auth.with(AuthState::is_admin));

    let delete = move |username: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::auth::session_api(auth, config).delete_user(&username).await {
                Ok(_) => users.update(|u| {
                    u.remove(&username);
                    u.notice = Some(deleted_notice(&username));
                }),
                Err(e) => {
                    let message = crate::util::auth::handle_api_error(auth, &e);
                    users.update(|u| u.notice = Some(message));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = username;
    };

    let on_registered = Callback::new(move |user: RegisteredUser| {
        users.update(|u| u.notice = Some(registered_notice(&user)));
        load();
    });

    let table = move || {
        users.with(|u| {
            if let Some(placeholder) = u.placeholder() {
                return view! { <p class="user-list__status">{placeholder.to_owned()}</p> }.into_any();
            }
            let admin = is_admin.get();
            let current = auth.with(|a| a.username().map(ToOwned::to_owned));
            let rows = u
                .items
                .iter()
                .map(|row| {
                    let action = can_delete(admin, current.as_deref(), row).then(|| {
                        let username = row.username.clone();
                        view! {
                            <button class="btn btn--danger" on:click=move |_| delete(username.clone())>
                                "Delete"
                            </button>
                        }
                    });
                    view! {
                        <tr>
                            <td>{row.username.clone()}</td>
                            <td>{row.email.clone().unwrap_or_else(|| "-".to_owned())}</td>
                            <td>{action}</td>
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <p class="user-list__count">{format!("Total users: {}", u.total())}</p>
                <table class="user-table">
                    <thead>
                        <tr>
                            <th>"Username"</th>
                            <th>"Email"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            }
            .into_any()
        })
    };

    view! {
        <div class="user-list-page">
            <NavBar />
            <main class="user-list">
                <h1>"Users"</h1>
                <Show when=move || users.with(|u| u.notice.is_some())>
                    <p class="user-list__notice">{move || users.with(|u| u.notice.clone().unwrap_or_default())}</p>
                </Show>
                {table}
                <Show when=move || is_admin.get()>
                    <section class="user-list__register">
                        <h2>"Register User"</h2>
                        <RegisterForm admin=true on_registered=on_registered />
                    </section>
                </Show>
            </main>
        </div>
    }
}
