//! Inline create/edit form on the task list.
//!
//! DESIGN
//! ======
//! All field rules (locked status while creating, progress only while In
//! Progress, owner only for admins) live in `model::TaskForm`; this component
//! only binds them to inputs and sends the resulting submission.

use leptos::prelude::*;
use model::{TaskForm, TaskStatus};

use crate::config::ClientConfig;
use crate::state::auth::AuthState;

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save task";

#[component]
pub fn TaskFormPanel(initial: TaskForm, is_admin: bool, on_saved: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let form = RwSignal::new(initial);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let submission = match form.with_untracked(|f| f.submission(is_admin)) {
            Ok(submission) => submission,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::util::auth::session_api(auth, config).submit(&submission).await;
            loading.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => {
                    crate::util::auth::handle_api_error(auth, &e);
                    error.set(Some(SAVE_FAILED_MESSAGE.to_owned()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (submission, auth, config, on_saved);
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <input
                class="task-form__input"
                name="title"
                placeholder="Title"
                required
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
            />
            <input
                class="task-form__input"
                name="description"
                placeholder="Description"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            />
            <select
                class="task-form__input"
                name="status"
                disabled=move || form.with(TaskForm::status_locked)
                on:change=move |ev| form.update(|f| f.set_status(TaskStatus::from(event_target_value(&ev))))
            >
                {move || {
                    form.with(|f| {
                        f.status_options()
                            .iter()
                            .map(|status| {
                                let selected = status == f.status();
                                let label = status.as_str().to_owned();
                                view! { <option value=label.clone() selected=selected>{label.clone()}</option> }
                            })
                            .collect_view()
                    })
                }}
            </select>
            <Show when=move || form.with(TaskForm::shows_progress)>
                <input
                    class="task-form__input task-form__input--progress"
                    type="number"
                    min="0"
                    max="100"
                    name="progress"
                    placeholder="Progress %"
                    required
                    prop:value=move || form.with(|f| f.progress().to_string())
                    on:input=move |ev| form.update(|f| f.set_progress_input(&event_target_value(&ev)))
                />
            </Show>
            <Show when=move || is_admin && !form.with(TaskForm::is_edit)>
                <input
                    class="task-form__input"
                    name="owner"
                    placeholder="Owner (username)"
                    prop:value=move || form.with(|f| f.owner.clone())
                    on:input=move |ev| form.update(|f| f.owner = event_target_value(&ev))
                />
            </Show>
            <button class="btn task-form__submit" type="submit" disabled=move || loading.get()>
                {move || form.with(|f| f.submit_label(loading.get()))}
            </button>
            <Show when=move || error.get().is_some()>
                <p class="task-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
