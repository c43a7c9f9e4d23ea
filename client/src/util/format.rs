//! Display formatting for timestamps.
//!
//! The services send UTC; tables show the browser's local time. On the server
//! the offset is unknown, so SSR renders UTC and hydration corrects it.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Duration, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render `at` in the browser's local time zone.
pub fn local_timestamp(at: DateTime<Utc>) -> String {
    format_with_offset(at, browser_offset_minutes(at))
}

pub fn local_timestamp_opt(at: Option<DateTime<Utc>>) -> String {
    at.map(local_timestamp).unwrap_or_default()
}

/// `offset_minutes` follows `Date.getTimezoneOffset()`: UTC minus local time.
pub fn format_with_offset(at: DateTime<Utc>, offset_minutes: i32) -> String {
    (at - Duration::minutes(i64::from(offset_minutes))).format(DISPLAY_FORMAT).to_string()
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn browser_offset_minutes(at: DateTime<Utc>) -> i32 {
    #[cfg(feature = "hydrate")]
    {
        let millis = wasm_bindgen::JsValue::from_f64(at.timestamp_millis() as f64);
        js_sys::Date::new(&millis).get_timezone_offset() as i32
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = at;
        0
    }
}
