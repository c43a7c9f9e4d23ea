//! REST API helpers for the auth and task services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! services are only reachable with the browser's bearer token.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed fetch degrades
//! the page (message, redirect) without crashing hydration. Service
//! rejections carry the `detail` text the services send back.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use model::{
    AccessToken, Acknowledgement, ActivityEntry, Comment, Credentials, Dashboard, Endpoint, NewTask, RegisteredUser, Registration,
    ServiceUrls, Submission, Task, TaskUpdate, UserCount, UserSummary,
};
#[cfg(any(test, feature = "hydrate"))]
use model::{bearer, detail_message};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Why a REST call failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not logged in")]
    MissingToken,
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The token is missing, expired, or rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::MissingToken) || self.status() == Some(401)
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum Body {
    Empty,
    Json(String),
    Form(String),
}

impl Body {
    fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_string(value).map(Self::Json).map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some("application/json"),
            Self::Form(_) => Some("application/x-www-form-urlencoded"),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = detail_message(body).unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Status { status, message }
}

/// REST client bound to the service URLs and the current token.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub struct Api {
    urls: ServiceUrls,
    token: Option<String>,
}

impl Api {
    pub fn new(urls: ServiceUrls, token: Option<String>) -> Self {
        Self { urls, token }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AccessToken, ApiError> {
        self.call(&Endpoint::Login, Body::Form(credentials.form_body())).await
    }

    /// # Errors
    ///
    /// Returns the service's rejection (e.g. the username is taken).
    pub async fn register(&self, registration: &Registration) -> Result<RegisteredUser, ApiError> {
        self.call(&Endpoint::Register, Body::json(registration)?).await
    }

    pub async fn admin_register(&self, registration: &Registration) -> Result<RegisteredUser, ApiError> {
        self.call(&Endpoint::AdminRegister, Body::json(registration)?).await
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.call(&Endpoint::ListUsers, Body::Empty).await
    }

    pub async fn count_users(&self) -> Result<UserCount, ApiError> {
        self.call(&Endpoint::CountUsers, Body::Empty).await
    }

    pub async fn delete_user(&self, username: &str) -> Result<Acknowledgement, ApiError> {
        self.call(&Endpoint::DeleteUser(username.to_owned()), Body::Empty).await
    }

    pub async fn list_tasks(&self, user: Option<&str>) -> Result<Vec<Task>, ApiError> {
        self.call(&Endpoint::ListTasks { user: user.map(ToOwned::to_owned) }, Body::Empty).await
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, ApiError> {
        self.call(&Endpoint::GetTask(id), Body::Empty).await
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        self.call(&Endpoint::CreateTask, Body::json(task)?).await
    }

    pub async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<Task, ApiError> {
        self.call(&Endpoint::UpdateTask(id), Body::json(update)?).await
    }

    /// Send whatever the task form produced.
    pub async fn submit(&self, submission: &Submission) -> Result<Task, ApiError> {
        let body = match submission {
            Submission::Create(task) => Body::json(task)?,
            Submission::Update { update, .. } => Body::json(update)?,
        };
        self.call(&submission.endpoint(), body).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.call(&Endpoint::DeleteTask(id), Body::Empty).await
    }

    pub async fn comments(&self, id: i64) -> Result<Vec<Comment>, ApiError> {
        self.call(&Endpoint::TaskComments(id), Body::Empty).await
    }

    pub async fn activity(&self, id: i64) -> Result<Vec<ActivityEntry>, ApiError> {
        self.call(&Endpoint::TaskActivity(id), Body::Empty).await
    }

    /// Fetch all five dashboard feeds concurrently, optionally scoped to one user.
    pub async fn dashboard(&self, user: Option<&str>) -> Result<Dashboard, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use model::DashboardSection;
            let endpoint = |section| Endpoint::Dashboard { section, user: user.map(ToOwned::to_owned) };
            let (status, productivity, progress, upcoming, user_summary) = futures::try_join!(
                self.call(&endpoint(DashboardSection::Status), Body::Empty),
                self.call(&endpoint(DashboardSection::Productivity), Body::Empty),
                self.call(&endpoint(DashboardSection::Progress), Body::Empty),
                self.call(&endpoint(DashboardSection::Upcoming), Body::Empty),
                self.call(&endpoint(DashboardSection::UserSummary), Body::Empty),
            )?;
            Ok(Dashboard { status, productivity, progress, upcoming, user_summary })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
            Err(ApiError::Unavailable)
        }
    }

    /// `Authorization` header value for `endpoint`, if it needs one.
    #[cfg(any(test, feature = "hydrate"))]
    fn authorization(&self, endpoint: &Endpoint) -> Result<Option<String>, ApiError> {
        if !endpoint.requires_auth() {
            return Ok(None);
        }
        let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;
        Ok(Some(bearer(token)))
    }

    async fn call<T: DeserializeOwned>(&self, endpoint: &Endpoint, body: Body) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method, RequestBuilder};

            let network = |e: gloo_net::Error| ApiError::Network(e.to_string());
            let method = match endpoint.method() {
                model::Method::Get => Method::GET,
                model::Method::Post => Method::POST,
                model::Method::Put => Method::PUT,
                model::Method::Delete => Method::DELETE,
            };
            let mut builder = RequestBuilder::new(&self.urls.url(endpoint)).method(method);
            if let Some(authorization) = self.authorization(endpoint)? {
                builder = builder.header("Authorization", &authorization);
            }
            if let Some(content_type) = body.content_type() {
                builder = builder.header("Content-Type", content_type);
            }
            let request = match body {
                Body::Empty => builder.build(),
                Body::Json(raw) | Body::Form(raw) => builder.body(raw),
            }
            .map_err(network)?;

            log::debug!("{endpoint}");
            let response = request.send().await.map_err(network)?;
            let text = response.text().await.map_err(network)?;
            if !response.ok() {
                let error = status_error(response.status(), &text);
                log::warn!("{endpoint} failed: {error}");
                return Err(error);
            }
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, body);
            Err(ApiError::Unavailable)
        }
    }
}
