//! Error bodies returned by the services.
//!
//! Both services answer failures with `{"detail": ...}`. `detail` is a plain
//! message for domain errors (duplicate user, missing task, forbidden) and a
//! list of `{loc, msg, type}` entries for request validation errors.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::{Deserialize, Serialize};

/// `{"detail": "..."}` acknowledgement returned by the delete endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub detail: String,
}

/// Parsed `{"detail": ...}` error body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiDetail {
    pub detail: DetailValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    Message(String),
    Validation(Vec<ValidationEntry>),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ValidationEntry {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl ValidationEntry {
    fn describe(&self) -> String {
        let field = self
            .loc
            .iter()
            .filter_map(|part| match part {
                serde_json::Value::String(s) if s != "body" && s != "query" => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(".");
        if field.is_empty() { self.msg.clone() } else { format!("{field}: {}", self.msg) }
    }
}

impl ApiDetail {
    #[must_use]
    pub fn message(&self) -> String {
        match &self.detail {
            DetailValue::Message(message) => message.clone(),
            DetailValue::Validation(entries) => {
                entries.iter().map(ValidationEntry::describe).collect::<Vec<_>>().join("; ")
            }
        }
    }
}

/// Human-readable message for an error response body.
///
/// Falls back to the trimmed raw body, or `None` when it is empty.
#[must_use]
pub fn detail_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ApiDetail>(body) {
        return Some(parsed.message());
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(serde_json::Value::String(s)) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return Some(s);
    }
    Some(trimmed.to_owned())
}
