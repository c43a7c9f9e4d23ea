//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and role-aware components to coordinate login
//! redirects and admin-only rendering. The token itself lives in
//! `localStorage`; this is the decoded, reactive copy.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use model::{Role, Session};

/// Authentication state tracking the signed-in session and loading status.
///
/// `loading` stays `true` until the browser has read the stored token, so
/// server-rendered markup never redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// Settled state for a stored token. Tokens that do not decode are
    /// treated as signed out.
    pub fn from_token(token: Option<String>) -> Self {
        let session = token.and_then(|t| Session::from_token(t).ok());
        Self { session, loading: false }
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(Session::username)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(Session::role)
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.loading = false;
    }
}
