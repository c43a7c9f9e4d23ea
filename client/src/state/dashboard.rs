//! Admin dashboard state: the five aggregate feeds and the user scope.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use model::Dashboard;

/// Starts `loading` so the first render shows the indicator, not empty panels.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub data: Dashboard,
    pub loading: bool,
    pub error: Option<String>,
    /// Username every feed is scoped to; `None` shows everyone.
    pub user: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { data: Dashboard::default(), loading: true, error: None, user: None }
    }
}

impl DashboardState {
    /// Change the user scope. Returns whether a refetch is needed.
    pub fn select_user(&mut self, user: Option<String>) -> bool {
        let user = user.map(|u| u.trim().to_owned()).filter(|u| !u.is_empty());
        if user == self.user {
            return false;
        }
        self.user = user;
        true
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Dashboard, String>) {
        self.loading = false;
        match result {
            Ok(data) => self.data = data,
            Err(message) => self.error = Some(message),
        }
    }

    /// Heading suffix naming the current scope.
    pub fn scope_label(&self) -> String {
        match &self.user {
            Some(user) => format!("for {user}"),
            None => "for all users".to_owned(),
        }
    }
}
