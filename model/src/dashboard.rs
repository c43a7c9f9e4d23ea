//! Admin dashboard aggregates served under `/dashboard/*`.
//!
//! The task service computes all of these; the client only scales them for
//! display.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::TaskStatus;
use crate::timestamp;

/// Chart palette, cycled by series index.
pub const PALETTE: [&str; 6] = ["#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#0088FE", "#00C49F"];

/// Colour for the `index`-th series.
#[must_use]
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One of the five dashboard queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DashboardSection {
    Status,
    Productivity,
    Progress,
    Upcoming,
    UserSummary,
}

impl DashboardSection {
    pub const ALL: [DashboardSection; 5] = [
        DashboardSection::Status,
        DashboardSection::Productivity,
        DashboardSection::Progress,
        DashboardSection::Upcoming,
        DashboardSection::UserSummary,
    ];

    /// Path segment after `/dashboard/`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Productivity => "productivity",
            Self::Progress => "progress",
            Self::Upcoming => "upcoming",
            Self::UserSummary => "user_summary",
        }
    }

    /// Card heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Status => "Task Status Overview",
            Self::Productivity => "User Productivity Trends",
            Self::Progress => "Task Progress Distribution",
            Self::Upcoming => "Upcoming Deadlines (Next 7 Days)",
            Self::UserSummary => "User Activity Summary",
        }
    }
}

impl fmt::Display for DashboardSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DashboardSection {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let folded = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|section| section.slug() == folded)
            .ok_or_else(|| format!("unknown dashboard section '{raw}'"))
    }
}

/// Count of tasks in one status (`/dashboard/status`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub status: TaskStatus,
    pub value: u64,
}

/// Tasks completed on one day (`/dashboard/productivity`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductivityPoint {
    pub date: String,
    pub completed: u64,
}

/// Tasks whose progress falls in one range, e.g. `"0-25"` (`/dashboard/progress`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressBucket {
    pub range: String,
    pub count: u64,
}

/// Task due within the next week (`/dashboard/upcoming`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpcomingTask {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_lenient")]
    pub deadline: Option<DateTime<Utc>>,
    pub status: TaskStatus,
}

impl UpcomingTask {
    /// Secondary line in the deadlines list.
    #[must_use]
    pub fn due_label(&self) -> String {
        let due = self
            .deadline
            .map_or_else(|| "unscheduled".to_owned(), |d| d.format("%Y-%m-%d").to_string());
        format!("Due: {due} | Status: {}", self.status)
    }
}

/// Per-user totals (`/dashboard/user_summary`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserActivity {
    pub username: String,
    #[serde(default)]
    pub assigned: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub comments: u64,
}

impl UserActivity {
    /// Avatar letter: first character upper-cased, `?` when the name is empty.
    #[must_use]
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
    }
}

/// All five dashboard feeds, fetched together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub status: Vec<StatusSlice>,
    pub productivity: Vec<ProductivityPoint>,
    pub progress: Vec<ProgressBucket>,
    pub upcoming: Vec<UpcomingTask>,
    pub user_summary: Vec<UserActivity>,
}

impl Dashboard {
    /// Sum of all status slices.
    #[must_use]
    pub fn total_tasks(&self) -> u64 {
        self.status.iter().fold(0, |acc, s| acc.saturating_add(s.value))
    }

    /// Share of each status slice in whole percent, in slice order.
    /// Empty when there are no tasks.
    #[must_use]
    pub fn status_shares(&self) -> Vec<(TaskStatus, u8)> {
        let total = self.total_tasks();
        if total == 0 {
            return Vec::new();
        }
        self.status
            .iter()
            .map(|slice| {
                let pct = (u128::from(slice.value) * 100 + u128::from(total) / 2) / u128::from(total);
                (slice.status.clone(), u8::try_from(pct.min(100)).unwrap_or(100))
            })
            .collect()
    }
}

/// Scale `value` against `max` into 0..=100 for bar heights.
#[must_use]
pub fn scale_percent(value: u64, max: u64) -> u8 {
    if max == 0 {
        return 0;
    }
    u8::try_from(u128::from(value.min(max)) * 100 / u128::from(max)).unwrap_or(100)
}
