//! Per-task comments and activity history.
//!
//! These feeds are read-only on the client. Field names vary between service
//! versions, so both records accept the common aliases and default anything
//! missing.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// Row of `GET /tasks/{id}/comments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default, alias = "username", alias = "user")]
    pub author: String,
    #[serde(default, alias = "text", alias = "body")]
    pub content: String,
    #[serde(default, alias = "timestamp", deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Row of `GET /tasks/{id}/activity`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, alias = "username", alias = "user")]
    pub actor: String,
    #[serde(default, alias = "event")]
    pub action: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default, alias = "timestamp", deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ActivityEntry {
    /// One-line description, e.g. `alice: status changed (To Do -> Done)`.
    #[must_use]
    pub fn summary(&self) -> String {
        let actor = if self.actor.is_empty() { "someone" } else { self.actor.as_str() };
        match self.detail.as_deref().filter(|d| !d.is_empty()) {
            Some(detail) => format!("{actor}: {} ({detail})", self.action),
            None => format!("{actor}: {}", self.action),
        }
    }
}
