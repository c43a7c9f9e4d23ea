//! On-disk bearer token, the terminal counterpart of the browser's
//! `localStorage` entry.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::CliError;

const TOKEN_DIR: &str = ".taskboard";
const TOKEN_FILE: &str = "token";

/// Default token location: `$HOME/.taskboard/token`, or `./.taskboard/token`
/// when no home directory is known.
#[must_use]
pub fn default_token_path() -> PathBuf {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    home.join(TOKEN_DIR).join(TOKEN_FILE)
}

pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token. A missing or blank file means "logged out".
    pub fn load(&self) -> Result<Option<String>, CliError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_owned()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(self.io_error(source)),
        }
    }

    /// Persist `token`, creating the parent directory when needed.
    pub fn save(&self, token: &str) -> Result<(), CliError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        fs::write(&self.path, format!("{}\n", token.trim())).map_err(|source| self.io_error(source))?;
        restrict_permissions(&self.path).map_err(|source| self.io_error(source))?;
        Ok(())
    }

    /// Remove the stored token. Returns whether one existed.
    pub fn clear(&self) -> Result<bool, CliError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: io::Error) -> CliError {
        CliError::TokenFile { path: self.path.clone(), source }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}
