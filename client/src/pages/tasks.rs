//! Task list page: table of the visible tasks plus the inline create/edit
//! form.
//!
//! DESIGN
//! ======
//! The form is keyed on (open, selected id) so switching selection rebuilds
//! it from the new task instead of keeping stale field values.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use model::Task;

use crate::components::nav_bar::NavBar;
use crate::components::task_form::TaskFormPanel;
use crate::components::task_table::TaskTable;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::tasks::TasksState;
use crate::util::auth::{Access, install_auth_redirect};

#[component]
pub fn TaskListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let tasks = RwSignal::new(TasksState::default());
    install_auth_redirect(auth, Access::SignedIn, use_navigate());

    let load = move || {
        tasks.update(TasksState::begin_load);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = tasks.with_untracked(|t| t.filter().map(ToOwned::to_owned));
            let result = crate::util::auth::session_api(auth, config)
                .list_tasks(user.as_deref())
                .await
                .map_err(|e| crate::util::auth::handle_api_error(auth, &e));
            tasks.update(|t| t.finish_load(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = config;
    };

    Effect::new(move || {
        if auth.with(|a| !a.loading && a.session.is_some()) {
            load();
        }
    });

    let is_admin = Memo::new(move |_| auth.with(AuthState::is_admin));
    let form_key = Memo::new(move |_| tasks.with(|t| (t.show_form, t.selected.as_ref().map(|s| s.id))));

    let on_select = Callback::new(move |task: Task| tasks.update(|t| t.open_edit(task)));
    let on_saved = Callback::new(move |()| {
        tasks.update(TasksState::after_save);
        load();
    });

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load();
    };

    let form = move || {
        form_key.get().0.then(|| {
            view! {
                <TaskFormPanel
                    initial=tasks.with_untracked(TasksState::form)
                    is_admin=is_admin.get_untracked()
                    on_saved=on_saved
                />
            }
        })
    };

    let table = move || {
        tasks.with(|t| {
            if t.loading && t.items.is_empty() {
                return view! { <p class="task-list__status">"Loading tasks..."</p> }.into_any();
            }
            if let Some(error) = &t.error {
                return view! { <p class="task-list__status task-list__status--error">{error.clone()}</p> }.into_any();
            }
            view! { <TaskTable tasks=t.items.clone() show_owner=is_admin.get() on_select=on_select /> }.into_any()
        })
    };

    view! {
        <div class="task-list-page">
            <NavBar />
            <main class="task-list">
                <div class="task-list__header">
                    <h1>"Your Tasks"</h1>
                    <button class="btn btn--primary" on:click=move |_| tasks.update(TasksState::toggle_form)>
                        {move || tasks.with(TasksState::toggle_label)}
                    </button>
                </div>
                <Show when=move || is_admin.get()>
                    <form class="task-list__filter" on:submit=on_filter>
                        <input
                            class="task-form__input"
                            type="text"
                            placeholder="Filter by user"
                            prop:value=move || tasks.with(|t| t.user_filter.clone())
                            on:input=move |ev| tasks.update(|t| t.user_filter = event_target_value(&ev))
                        />
                        <button class="btn" type="submit">"Filter"</button>
                    </form>
                </Show>
                {form}
                {table}
            </main>
        </div>
    }
}
