//! Plain-text rendering of service responses for terminal output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use model::{
    ActivityEntry, Comment, Dashboard, DashboardSection, ProgressBar, Task, UserSummary, dashboard::scale_percent,
};
use serde::Serialize;

use crate::error::CliError;

const BAR_WIDTH: usize = 20;
const TITLE_WIDTH: usize = 32;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Task list. The owner column is shown to admins only.
#[must_use]
pub fn task_table(tasks: &[Task], show_owner: bool) -> String {
    if tasks.is_empty() {
        return "No tasks.".to_owned();
    }
    let mut lines = Vec::with_capacity(tasks.len() + 1);
    let mut header = format!("{:>5}  {:<TITLE_WIDTH$}  {:<12}", "ID", "TITLE", "STATUS");
    if show_owner {
        header.push_str(&format!("  {:<12}", "OWNER"));
    }
    header.push_str("  PROGRESS");
    lines.push(header);

    for task in tasks {
        let mut line = format!(
            "{:>5}  {:<TITLE_WIDTH$}  {:<12}",
            task.id,
            truncate(&task.title, TITLE_WIDTH),
            task.status.as_str()
        );
        if show_owner {
            line.push_str(&format!("  {:<12}", truncate(&task.owner, 12)));
        }
        line.push_str("  ");
        line.push_str(&ProgressBar::for_task(task).render_text(BAR_WIDTH));
        lines.push(line);
    }
    lines.join("\n")
}

/// Full task view with its comment and activity feeds.
#[must_use]
pub fn task_detail(task: &Task, comments: &[Comment], activity: &[ActivityEntry]) -> String {
    let mut lines = vec![
        format!("#{} {}", task.id, task.title),
        format!("Status:      {}", task.status),
        format!("Owner:       {}", if task.owner.is_empty() { "-" } else { &task.owner }),
        format!("Created:     {}", task.created_at.format(TIMESTAMP_FORMAT)),
    ];
    if let Some(done) = task.completed_at {
        lines.push(format!("Completed:   {}", done.format(TIMESTAMP_FORMAT)));
    }
    lines.push(format!("Progress:    {}", ProgressBar::for_task(task).render_text(BAR_WIDTH)));
    if let Some(description) = task.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(String::new());
        lines.push(description.trim().to_owned());
    }

    lines.push(String::new());
    lines.push(format!("Comments ({})", comments.len()));
    if comments.is_empty() {
        lines.push("  No comments yet.".to_owned());
    }
    for comment in comments {
        let when = comment.created_at.map(|t| format!(" [{}]", t.format(TIMESTAMP_FORMAT))).unwrap_or_default();
        let author = if comment.author.is_empty() { "anonymous" } else { &comment.author };
        lines.push(format!("  {author}{when}: {}", comment.content));
    }

    lines.push(String::new());
    lines.push(format!("Activity ({})", activity.len()));
    if activity.is_empty() {
        lines.push("  No activity recorded.".to_owned());
    }
    for entry in activity {
        let when = entry.created_at.map(|t| format!("{}  ", t.format(TIMESTAMP_FORMAT))).unwrap_or_default();
        lines.push(format!("  {when}{}", entry.summary()));
    }
    lines.join("\n")
}

#[must_use]
pub fn user_table(users: &[UserSummary]) -> String {
    if users.is_empty() {
        return "No users.".to_owned();
    }
    let mut lines = vec![format!("{:>5}  {:<20}  EMAIL", "ID", "USERNAME")];
    for user in users {
        lines.push(format!("{:>5}  {:<20}  {}", user.id, user.username, user.email.as_deref().unwrap_or("-")));
    }
    lines.join("\n")
}

/// Text report of the requested dashboard sections, in the given order.
#[must_use]
pub fn dashboard_report(dashboard: &Dashboard, sections: &[DashboardSection]) -> String {
    sections
        .iter()
        .map(|section| {
            let body = match section {
                DashboardSection::Status => status_section(dashboard),
                DashboardSection::Productivity => productivity_section(dashboard),
                DashboardSection::Progress => progress_section(dashboard),
                DashboardSection::Upcoming => upcoming_section(dashboard),
                DashboardSection::UserSummary => user_summary_section(dashboard),
            };
            format!("== {} ==\n{body}", section.title())
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn status_section(dashboard: &Dashboard) -> String {
    let shares = dashboard.status_shares();
    if shares.is_empty() {
        return "No tasks.".to_owned();
    }
    dashboard
        .status
        .iter()
        .zip(shares)
        .map(|(slice, (_, pct))| format!("{:<12} {:>5}  {pct:>3}%", slice.status.as_str(), slice.value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn productivity_section(dashboard: &Dashboard) -> String {
    let max = dashboard.productivity.iter().map(|p| p.completed).max().unwrap_or(0);
    if dashboard.productivity.is_empty() {
        return "No completions recorded.".to_owned();
    }
    dashboard
        .productivity
        .iter()
        .map(|point| format!("{:<10} {} {}", point.date, bar(point.completed, max), point.completed))
        .collect::<Vec<_>>()
        .join("\n")
}

fn progress_section(dashboard: &Dashboard) -> String {
    let max = dashboard.progress.iter().map(|b| b.count).max().unwrap_or(0);
    if dashboard.progress.is_empty() {
        return "No tasks in progress.".to_owned();
    }
    dashboard
        .progress
        .iter()
        .map(|bucket| format!("{:<10} {} {}", bucket.range, bar(bucket.count, max), bucket.count))
        .collect::<Vec<_>>()
        .join("\n")
}

fn upcoming_section(dashboard: &Dashboard) -> String {
    if dashboard.upcoming.is_empty() {
        return "No upcoming deadlines.".to_owned();
    }
    dashboard
        .upcoming
        .iter()
        .map(|task| format!("#{} {}\n    {}", task.id, task.title, task.due_label()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn user_summary_section(dashboard: &Dashboard) -> String {
    if dashboard.user_summary.is_empty() {
        return "No user activity.".to_owned();
    }
    dashboard
        .user_summary
        .iter()
        .map(|user| {
            format!(
                "[{}] {:<16} Assigned: {} | Completed: {} | Comments: {}",
                user.initial(),
                user.username,
                user.assigned,
                user.completed,
                user.comments
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bar(value: u64, max: u64) -> String {
    let filled = usize::from(scale_percent(value, max)) * BAR_WIDTH / 100;
    format!("{:<BAR_WIDTH$}", "#".repeat(filled))
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
