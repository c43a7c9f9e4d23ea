//! User and credential records for the auth service.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role carried in the bearer token.
///
/// Unknown role strings read as `User`, which is also what the auth service
/// assigns when registration omits a role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    User,
    Admin,
    Guest,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Admin, Role::Guest];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
            Self::Guest => "Guest",
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "guest" => Ok(Self::Guest),
            other => Err(format!("unknown role '{other}' (expected User, Admin or Guest)")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /register` and `POST /admin/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

/// Form fields of `POST /login` (sent `application/x-www-form-urlencoded`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Trimmed username plus untouched password, or `None` when either is empty.
    #[must_use]
    pub fn normalized(username: &str, password: &str) -> Option<Self> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self { username: username.to_owned(), password: password.to_owned() })
    }

    /// `application/x-www-form-urlencoded` body for `POST /login`.
    #[must_use]
    pub fn form_body(&self) -> String {
        format!(
            "username={}&password={}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        )
    }
}

/// Response of a successful registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role: Role,
}

/// Response of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Row of `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Response of `GET /users/count`; accepts `{"count": n}` or a bare number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawUserCount")]
pub struct UserCount {
    pub count: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserCount {
    Bare(u64),
    Wrapped { count: u64 },
}

impl From<RawUserCount> for UserCount {
    fn from(raw: RawUserCount) -> Self {
        match raw {
            RawUserCount::Bare(count) | RawUserCount::Wrapped { count } => Self { count },
        }
    }
}
