//! Task list table.

use leptos::prelude::*;
use leptos_router::components::A;
use model::Task;

use crate::components::progress_bar::ProgressBar;
use crate::util::format::local_timestamp;

/// Rows of tasks. Clicking a name hands the task to `on_select`; the
/// trailing link opens its detail page.
#[component]
pub fn TaskTable(tasks: Vec<Task>, show_owner: bool, on_select: Callback<Task>) -> impl IntoView {
    if tasks.is_empty() {
        return view! { <p class="task-table__empty">"No tasks yet."</p> }.into_any();
    }

    let rows = tasks
        .into_iter()
        .map(|task| {
            let selected = task.clone();
            let detail_href = format!("/tasks/{}", task.id);
            let owner = show_owner.then(|| view! { <td>{task.owner.clone()}</td> });
            view! {
                <tr class="task-table__row">
                    <td>
                        <a
                            href="#"
                            class="task-table__name"
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                on_select.run(selected.clone());
                            }
                        >
                            {task.title.clone()}
                        </a>
                    </td>
                    <td>{task.description.clone().unwrap_or_default()}</td>
                    <td>{local_timestamp(task.created_at)}</td>
                    <td class="task-table__progress">
                        <ProgressBar progress=task.progress status=task.status.clone()/>
                    </td>
                    <td>{task.status.to_string()}</td>
                    {owner}
                    <td>
                        <A href=detail_href>"Details"</A>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="task-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Description"</th>
                    <th>"Created At"</th>
                    <th>"Progress"</th>
                    <th>"Status"</th>
                    {show_owner.then(|| view! { <th>"Owner"</th> })}
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}
