//! Task records exchanged with the task service.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// Workflow status of a task.
///
/// The service stores status as free text. The three known values map to
/// dedicated variants; anything else is preserved verbatim in `Other`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    ToDo,
    InProgress,
    Done,
    Other(String),
}

impl TaskStatus {
    /// Statuses a user can pick in the task form, in display order.
    pub const KNOWN: [TaskStatus; 3] = [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done];

    /// Wire and display label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
            Self::Other(raw) => raw,
        }
    }

    /// Parse a status label, accepting the CLI-friendly spellings
    /// `todo`, `in-progress`, `in_progress` and `done` case-insensitively.
    #[must_use]
    pub fn parse_loose(raw: &str) -> Self {
        let folded: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "todo" => Self::ToDo,
            "inprogress" => Self::InProgress,
            "done" => Self::Done,
            _ => Self::Other(raw.trim().to_owned()),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "To Do" => Self::ToDo,
            "In Progress" => Self::InProgress,
            "Done" => Self::Done,
            _ => Self::Other(raw),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task as returned by `GET /tasks` and `GET /tasks/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Username of the owning user.
    #[serde(default)]
    pub owner: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Raw progress percentage as stored by the service.
    #[serde(default)]
    pub progress: i32,
}

impl Task {
    /// Percentage to render: `Done` always shows as complete.
    #[must_use]
    pub fn display_progress(&self) -> u8 {
        effective_progress(self.progress, &self.status)
    }
}

/// Clamp a raw progress value into 0..=100, forcing 100 for finished tasks.
#[must_use]
pub fn effective_progress(progress: i32, status: &TaskStatus) -> u8 {
    if *status == TaskStatus::Done {
        return 100;
    }
    u8::try_from(progress.clamp(0, 100)).unwrap_or(0)
}

/// Body of `POST /tasks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    /// Only honoured for admins; the service assigns the caller otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// Body of `PUT /tasks/{id}`. Absent fields are left untouched by the service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl TaskUpdate {
    /// The update sent by the task detail "save progress" control.
    #[must_use]
    pub fn progress(progress: u8) -> Self {
        Self { progress: Some(progress.min(100)), status: Some(TaskStatus::InProgress), ..Self::default() }
    }
}
