//! Typed HTTP client for the auth and task services.
//!
//! Every call resolves through [`model::Endpoint`], so URLs, verbs, and the
//! bearer requirement live in one place shared with the browser client.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::time::Duration;

use model::{
    AccessToken, Acknowledgement, ActivityEntry, Comment, Credentials, Dashboard, DashboardSection, Endpoint, Method, NewTask,
    RegisteredUser, Registration, ServiceUrls, Task, TaskUpdate, UserCount, UserSummary, bearer, detail_message,
};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use crate::error::CliError;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

pub struct ApiClient {
    http: reqwest::Client,
    urls: ServiceUrls,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(urls: ServiceUrls, token: Option<String>) -> Result<Self, CliError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| CliError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, urls, token })
    }

    // =========================================================================
    // AUTH SERVICE
    // =========================================================================

    pub async fn register(&self, registration: &Registration) -> Result<RegisteredUser, CliError> {
        let request = self.request(&Endpoint::Register)?.json(registration);
        self.execute(&Endpoint::Register, request).await
    }

    /// Admin-only registration of another account.
    pub async fn admin_register(&self, registration: &Registration) -> Result<RegisteredUser, CliError> {
        let request = self.request(&Endpoint::AdminRegister)?.json(registration);
        self.execute(&Endpoint::AdminRegister, request).await
    }

    /// Exchange credentials for a bearer token (form-encoded, OAuth2 password flow).
    pub async fn login(&self, credentials: &Credentials) -> Result<AccessToken, CliError> {
        let request = self.request(&Endpoint::Login)?.form(credentials);
        self.execute(&Endpoint::Login, request).await
    }

    // =========================================================================
    // USERS
    // =========================================================================

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, CliError> {
        self.send(&Endpoint::ListUsers).await
    }

    pub async fn count_users(&self) -> Result<UserCount, CliError> {
        self.send(&Endpoint::CountUsers).await
    }

    /// Delete a user together with all tasks they own.
    pub async fn delete_user(&self, username: &str) -> Result<Acknowledgement, CliError> {
        self.send(&Endpoint::DeleteUser(username.to_owned())).await
    }

    // =========================================================================
    // TASKS
    // =========================================================================

    pub async fn list_tasks(&self, user: Option<&str>) -> Result<Vec<Task>, CliError> {
        self.send(&Endpoint::ListTasks { user: user.map(ToOwned::to_owned) }).await
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, CliError> {
        self.send(&Endpoint::GetTask(id)).await
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<Task, CliError> {
        let request = self.request(&Endpoint::CreateTask)?.json(task);
        self.execute(&Endpoint::CreateTask, request).await
    }

    pub async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<Task, CliError> {
        let endpoint = Endpoint::UpdateTask(id);
        let request = self.request(&endpoint)?.json(update);
        self.execute(&endpoint, request).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<Acknowledgement, CliError> {
        self.send(&Endpoint::DeleteTask(id)).await
    }

    pub async fn comments(&self, id: i64) -> Result<Vec<Comment>, CliError> {
        self.send(&Endpoint::TaskComments(id)).await
    }

    pub async fn activity(&self, id: i64) -> Result<Vec<ActivityEntry>, CliError> {
        self.send(&Endpoint::TaskActivity(id)).await
    }

    // =========================================================================
    // DASHBOARD
    // =========================================================================

    pub async fn dashboard_section<T: DeserializeOwned>(
        &self,
        section: DashboardSection,
        user: Option<&str>,
    ) -> Result<T, CliError> {
        self.send(&Endpoint::Dashboard { section, user: user.map(ToOwned::to_owned) })
            .await
    }

    /// Fetch all five dashboard feeds concurrently.
    pub async fn dashboard(&self, user: Option<&str>) -> Result<Dashboard, CliError> {
        let (status, productivity, progress, upcoming, user_summary) = tokio::try_join!(
            self.dashboard_section(DashboardSection::Status, user),
            self.dashboard_section(DashboardSection::Productivity, user),
            self.dashboard_section(DashboardSection::Progress, user),
            self.dashboard_section(DashboardSection::Upcoming, user),
            self.dashboard_section(DashboardSection::UserSummary, user),
        )?;
        Ok(Dashboard { status, productivity, progress, upcoming, user_summary })
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    /// Send a body-less request and decode the JSON response.
    async fn send<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, CliError> {
        let request = self.request(endpoint)?;
        self.execute(endpoint, request).await
    }

    fn request(&self, endpoint: &Endpoint) -> Result<reqwest::RequestBuilder, CliError> {
        let url = self.urls.url(endpoint);
        let request = self.http.request(reqwest_method(endpoint.method()), &url);
        if !endpoint.requires_auth() {
            return Ok(request);
        }
        let token = self.token.as_deref().ok_or(CliError::MissingToken)?;
        Ok(request.header(AUTHORIZATION, bearer(token)))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CliError> {
        tracing::debug!(%endpoint, "sending request");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = detail_message(&body)
                .or_else(|| status.canonical_reason().map(ToOwned::to_owned))
                .unwrap_or_default();
            tracing::warn!(%endpoint, status = status.as_u16(), %message, "request rejected");
            return Err(CliError::Api { endpoint: endpoint.to_string(), status: status.as_u16(), message });
        }

        tracing::debug!(%endpoint, status = status.as_u16(), bytes = body.len(), "response received");
        Ok(serde_json::from_str(&body)?)
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}
