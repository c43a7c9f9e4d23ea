//! Catalogue of REST endpoints exposed by the auth and task services.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two services back the application: the auth service issues tokens and
//! registers accounts, the task service owns tasks, users listing, and the
//! admin dashboard. Every call the front ends make is one [`Endpoint`]; the
//! browser and CLI transports only differ in how they send it.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use std::fmt;

use crate::dashboard::DashboardSection;

pub const DEFAULT_AUTH_URL: &str = "http://localhost:8000";
pub const DEFAULT_TASKS_URL: &str = "http://localhost:8001";

/// Which backend service answers an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    Auth,
    Tasks,
}

/// HTTP verb of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One REST call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    AdminRegister,
    Login,
    ListUsers,
    CountUsers,
    DeleteUser(String),
    /// `user` narrows the list to one owner (admins only).
    ListTasks { user: Option<String> },
    CreateTask,
    GetTask(i64),
    UpdateTask(i64),
    DeleteTask(i64),
    TaskComments(i64),
    TaskActivity(i64),
    Dashboard { section: DashboardSection, user: Option<String> },
}

impl Endpoint {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::Register | Self::AdminRegister | Self::Login | Self::CreateTask => Method::Post,
            Self::UpdateTask(_) => Method::Put,
            Self::DeleteUser(_) | Self::DeleteTask(_) => Method::Delete,
            Self::ListUsers
            | Self::CountUsers
            | Self::ListTasks { .. }
            | Self::GetTask(_)
            | Self::TaskComments(_)
            | Self::TaskActivity(_)
            | Self::Dashboard { .. } => Method::Get,
        }
    }

    #[must_use]
    pub fn service(&self) -> Service {
        match self {
            Self::Register | Self::AdminRegister | Self::Login => Service::Auth,
            _ => Service::Tasks,
        }
    }

    /// Everything except public registration and login needs a bearer token.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Register | Self::Login)
    }

    /// Path with percent-encoded segments, without query.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Register => "/register".to_owned(),
            Self::AdminRegister => "/admin/register".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::ListUsers => "/users".to_owned(),
            Self::CountUsers => "/users/count".to_owned(),
            Self::DeleteUser(username) => format!("/users/{}", urlencoding::encode(username)),
            Self::ListTasks { .. } | Self::CreateTask => "/tasks".to_owned(),
            Self::GetTask(id) | Self::UpdateTask(id) | Self::DeleteTask(id) => format!("/tasks/{id}"),
            Self::TaskComments(id) => format!("/tasks/{id}/comments"),
            Self::TaskActivity(id) => format!("/tasks/{id}/activity"),
            Self::Dashboard { section, .. } => format!("/dashboard/{}", section.slug()),
        }
    }

    /// Query parameters, already trimmed of empty values.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ListTasks { user } | Self::Dashboard { user, .. } => user
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| vec![("user", u.to_owned())])
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Path plus encoded query string.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        let query = self.query();
        if query.is_empty() {
            return self.path();
        }
        let encoded = query
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{encoded}", self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path_and_query())
    }
}

/// Base URLs of both services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceUrls {
    auth: String,
    tasks: String,
}

impl Default for ServiceUrls {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_URL, DEFAULT_TASKS_URL)
    }
}

impl ServiceUrls {
    #[must_use]
    pub fn new(auth: &str, tasks: &str) -> Self {
        Self { auth: auth.trim().trim_end_matches('/').to_owned(), tasks: tasks.trim().trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base(&self, service: Service) -> &str {
        match service {
            Service::Auth => &self.auth,
            Service::Tasks => &self.tasks,
        }
    }

    /// Absolute URL of `endpoint`, query included.
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base(endpoint.service()), endpoint.path_and_query())
    }
}
