//! Coloured completion bar used by the task table and task detail.

use leptos::prelude::*;
use model::TaskStatus;

/// Horizontal bar filled to the task's effective progress. `Done` tasks
/// always render full.
#[component]
pub fn ProgressBar(progress: i32, status: TaskStatus, #[prop(optional)] large: bool) -> impl IntoView {
    let bar = model::ProgressBar::new(progress, &status);
    view! {
        <div class="progress-bar" class:progress-bar--large=large>
            <div class=format!("progress-bar__fill progress-bar__fill--{}", bar.level.css_modifier()) style=bar.fill_style()>
                {bar.label()}
            </div>
        </div>
    }
}
