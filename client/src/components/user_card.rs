//! Per-user activity card on the admin dashboard.

use leptos::prelude::*;
use model::UserActivity;

#[component]
pub fn UserCard(activity: UserActivity, on_select: Callback<String>) -> impl IntoView {
    let username = activity.username.clone();
    view! {
        <button class="user-card" on:click=move |_| on_select.run(username.clone()) title="Show this user's dashboard">
            <span class="user-card__avatar">{activity.initial()}</span>
            <span class="user-card__name">{activity.username.clone()}</span>
            <span class="user-card__stats">
                {format!(
                    "Assigned: {} | Completed: {} | Comments: {}",
                    activity.assigned,
                    activity.completed,
                    activity.comments,
                )}
            </span>
        </button>
    }
}
