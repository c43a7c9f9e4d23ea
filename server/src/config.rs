//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Overrides the Leptos site root that `/pkg` assets are served from.
    pub site_root: Option<PathBuf>,
}

impl HostConfig {
    /// Build host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: default from the Leptos configuration
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            Some(value) => value.parse().map_err(|source| HostError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let site_root = lookup("SITE_ROOT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Ok(Self { port, site_root })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
