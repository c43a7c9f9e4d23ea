//! User-list page state.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use model::UserSummary;

pub const LOADING_MESSAGE: &str = "Loading users...";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsersState {
    pub items: Vec<UserSummary>,
    pub count: Option<u64>,
    pub loading: bool,
    pub error: Option<String>,
    /// Outcome of the last admin action (delete / register).
    pub notice: Option<String>,
}

impl Default for UsersState {
    fn default() -> Self {
        Self { items: Vec::new(), count: None, loading: true, error: None, notice: None }
    }
}

impl UsersState {
    /// Placeholder text shown instead of the table, if any.
    pub fn placeholder(&self) -> Option<&str> {
        if self.loading {
            return Some(LOADING_MESSAGE);
        }
        self.error.as_deref()
    }

    pub fn finish_load(&mut self, result: Result<Vec<UserSummary>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => {
                log_fetch_failure(&message);
                self.error = Some(FETCH_FAILED_MESSAGE.to_owned());
            }
        }
    }

    /// Count from `/users/count`, falling back to the listed rows.
    pub fn total(&self) -> u64 {
        self.count.unwrap_or(self.items.len() as u64)
    }

    /// Drop a deleted user without refetching.
    pub fn remove(&mut self, username: &str) {
        self.items.retain(|u| u.username != username);
        if let Some(count) = self.count.as_mut() {
            *count = count.saturating_sub(1);
        }
    }
}

fn log_fetch_failure(message: &str) {
    #[cfg(feature = "hydrate")]
    log::error!("fetching users failed: {message}");
    #[cfg(not(feature = "hydrate"))]
    let _ = message;
}
