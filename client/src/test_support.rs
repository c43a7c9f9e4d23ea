//! Fixtures shared by the unit tests.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{TimeZone, Utc};
use model::{Task, TaskStatus};

/// Unsigned JWT carrying `sub` and `role` claims.
pub(crate) fn jwt(sub: &str, role: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(serde_json::json!({ "sub": sub, "role": role }).to_string());
    format!("{header}.{body}.c2ln")
}

pub(crate) fn task(id: i64, status: TaskStatus, progress: i32) -> Task {
    Task {
        id,
        title: format!("task {id}"),
        description: None,
        status,
        owner: "bob".to_owned(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        completed_at: None,
        progress,
    }
}
