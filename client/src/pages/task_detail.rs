//! Single-task page: fields, progress control, comments and activity.

#[cfg(test)]
#[path = "task_detail_test.rs"]
mod task_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use model::{ActivityEntry, Comment, Task, TaskStatus};

use crate::components::nav_bar::NavBar;
use crate::components::progress_bar::ProgressBar;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::auth::{Access, install_auth_redirect};
use crate::util::format::{local_timestamp, local_timestamp_opt};

pub const LOADING_MESSAGE: &str = "Loading task details...";
pub const PROGRESS_SAVED_MESSAGE: &str = "Progress updated successfully.";
pub const PROGRESS_FAILED_MESSAGE: &str = "Failed to update progress.";

/// Route parameter to task id. Anything non-numeric is a missing task.
pub fn parse_task_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id: &i64| *id > 0)
}

pub fn progress_save_label(saving: bool) -> &'static str {
    if saving { "Saving..." } else { "Save Progress" }
}

/// The progress control only appears while work is under way.
pub fn shows_progress_control(task: &Task) -> bool {
    task.status == TaskStatus::InProgress
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Detail {
    task: Option<Task>,
    comments: Vec<Comment>,
    activity: Vec<ActivityEntry>,
    error: Option<String>,
}

#[component]
pub fn TaskDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let params = use_params_map();
    let navigate = use_navigate();
    install_auth_redirect(auth, Access::SignedIn, navigate.clone());
    let deleted = RwSignal::new(false);
    Effect::new(move || {
        if deleted.get() {
            navigate("/tasks", NavigateOptions::default());
        }
    });

    let detail = RwSignal::new(Detail::default());
    let progress_input = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<&'static str>);
    let task_id = Memo::new(move |_| params.with(|p| parse_task_id(p.get("id").as_deref())));

    let load = move || {
        let Some(id) = task_id.get_untracked() else {
            detail.set(Detail { error: Some("Task not found.".to_owned()), ..Detail::default() });
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::util::auth::session_api(auth, config);
            let (task, comments, activity) = futures::join!(api.get_task(id), api.comments(id), api.activity(id));
            let next = match task {
                Ok(task) => {
                    progress_input.set(model::effective_progress(task.progress, &task.status).to_string());
                    Detail {
                        task: Some(task),
                        comments: comments.unwrap_or_else(|e| {
                            log::warn!("comments for task {id} failed: {e}");
                            Vec::new()
                        }),
                        activity: activity.unwrap_or_else(|e| {
                            log::warn!("activity for task {id} failed: {e}");
                            Vec::new()
                        }),
                        error: None,
                    }
                }
                Err(e) => Detail { error: Some(crate::util::auth::handle_api_error(auth, &e)), ..Detail::default() },
            };
            detail.set(next);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, config, progress_input);
    };

    Effect::new(move || {
        task_id.track();
        if auth.with(|a| !a.loading && a.session.is_some()) {
            load();
        }
    });

    let on_save_progress = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = task_id.get_untracked() else {
            return;
        };
        if saving.get_untracked() {
            return;
        }
        let update = model::TaskUpdate::progress(model::clamp_progress_input(&progress_input.get_untracked()));
        saving.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::util::auth::session_api(auth, config).update_task(id, &update).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    notice.set(Some(PROGRESS_SAVED_MESSAGE));
                    load();
                }
                Err(e) => {
                    crate::util::auth::handle_api_error(auth, &e);
                    notice.set(Some(PROGRESS_FAILED_MESSAGE));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, update);
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        let Some(id) = task_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::auth::session_api(auth, config).delete_task(id).await {
                Ok(_) => deleted.set(true),
                Err(e) => {
                    let message = crate::util::auth::handle_api_error(auth, &e);
                    detail.update(|d| d.error = Some(message));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, deleted);
    };

    let body = move || {
        detail.with(|d| {
            if let Some(error) = &d.error {
                return view! { <p class="task-detail__status task-detail__status--error">{error.clone()}</p> }
                    .into_any();
            }
            let Some(task) = d.task.clone() else {
                return view! { <p class="task-detail__status">{LOADING_MESSAGE}</p> }.into_any();
            };
            let control = shows_progress_control(&task).then(|| {
                view! {
                    <form class="task-detail__progress" on:submit=on_save_progress>
                        <label>
                            "Update Progress (%):"
                            <input
                                class="task-form__input"
                                type="number"
                                min="0"
                                max="100"
                                prop:value=move || progress_input.get()
                                on:input=move |ev| progress_input.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || progress_save_label(saving.get())}
                        </button>
                    </form>
                }
            });
            view! {
                <article class="task-detail">
                    <h1>{task.title.clone()}</h1>
                    <p class="task-detail__description">{task.description.clone().unwrap_or_default()}</p>
                    <dl class="task-detail__fields">
                        <dt>"Status"</dt>
                        <dd>{task.status.to_string()}</dd>
                        <dt>"Owner"</dt>
                        <dd>{task.owner.clone()}</dd>
                        <dt>"Created At"</dt>
                        <dd>{local_timestamp(task.created_at)}</dd>
                        <dt>"Completed At"</dt>
                        <dd>{local_timestamp_opt(task.completed_at)}</dd>
                    </dl>
                    <ProgressBar progress=task.progress status=task.status.clone() large=true />
                    {control}
                    <section class="task-detail__comments">
                        <h2>"Comments"</h2>
                        {comment_list(&d.comments)}
                    </section>
                    <section class="task-detail__activity">
                        <h2>"Activity"</h2>
                        {activity_list(&d.activity)}
                    </section>
                    <button class="btn btn--danger" on:click=on_delete>"Delete Task"</button>
                </article>
            }
            .into_any()
        })
    };

    view! {
        <div class="task-detail-page">
            <NavBar />
            <main>
                <A href="/tasks">"Back to tasks"</A>
                <Show when=move || notice.get().is_some()>
                    <p class="task-detail__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                {body}
            </main>
        </div>
    }
}

fn comment_list(comments: &[Comment]) -> impl IntoView {
    if comments.is_empty() {
        return view! { <p class="task-detail__empty">"No comments yet."</p> }.into_any();
    }
    let items = comments
        .iter()
        .map(|c| {
            view! {
                <li>
                    <strong>{c.author.clone()}</strong>
                    " "
                    <span class="task-detail__when">{local_timestamp_opt(c.created_at)}</span>
                    <p>{c.content.clone()}</p>
                </li>
            }
        })
        .collect_view();
    view! { <ul class="task-detail__list">{items}</ul> }.into_any()
}

fn activity_list(entries: &[ActivityEntry]) -> impl IntoView {
    if entries.is_empty() {
        return view! { <p class="task-detail__empty">"No activity recorded."</p> }.into_any();
    }
    let items = entries
        .iter()
        .map(|a| {
            view! {
                <li>
                    <span class="task-detail__when">{local_timestamp_opt(a.created_at)}</span>
                    " "
                    {a.summary()}
                </li>
            }
        })
        .collect_view();
    view! { <ul class="task-detail__list">{items}</ul> }.into_any()
}
