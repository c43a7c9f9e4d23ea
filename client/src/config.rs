//! Service locations baked into the browser bundle.
//!
//! The WASM bundle cannot read the server's environment at runtime, so the
//! auth and task service URLs are captured at build time from
//! `TASKBOARD_AUTH_URL` / `TASKBOARD_API_URL`, falling back to the local
//! development ports.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use model::ServiceUrls;
use model::endpoint::{DEFAULT_AUTH_URL, DEFAULT_TASKS_URL};

/// Client configuration shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub urls: ServiceUrls,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl ClientConfig {
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("TASKBOARD_AUTH_URL"), option_env!("TASKBOARD_API_URL"))
    }

    /// Blank overrides fall back to the defaults.
    #[must_use]
    pub fn from_overrides(auth: Option<&str>, tasks: Option<&str>) -> Self {
        let pick = |value: Option<&str>, fallback: &'static str| {
            value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(fallback).to_owned()
        };
        let auth = pick(auth, DEFAULT_AUTH_URL);
        let tasks = pick(tasks, DEFAULT_TASKS_URL);
        Self { urls: ServiceUrls::new(&auth, &tasks) }
    }
}
