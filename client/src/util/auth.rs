//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: signed-out visitors go
//! to `/login`, signed-in non-admins leave admin-only routes for `/tasks`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::ClientConfig;
use crate::net::api::{Api, ApiError};
use crate::state::auth::AuthState;
use crate::util::storage;

/// Where an access level sends the current visitor, if anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    SignedIn,
    Admin,
}

/// Redirect target for `state` on a route requiring `access`.
/// Nothing happens until the stored token has been read.
pub fn redirect_target(state: &AuthState, access: Access) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    if state.session.is_none() {
        return Some("/login");
    }
    if access == Access::Admin && !state.is_admin() {
        return Some("/tasks");
    }
    None
}

/// Keep the route guarded for as long as it is mounted.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, access: Access, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(&auth.get(), access) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Forget the token everywhere.
pub fn sign_out(auth: RwSignal<AuthState>) {
    storage::clear_token();
    auth.update(AuthState::sign_out);
}

/// A rejected or missing token signs the visitor out, which in turn fires the
/// route guard. Returns the message to show for any other failure.
pub fn handle_api_error(auth: RwSignal<AuthState>, error: &ApiError) -> String {
    if error.is_unauthorized() {
        sign_out(auth);
    }
    error.to_string()
}

/// REST client for the current session.
pub fn session_api(auth: RwSignal<AuthState>, config: StoredValue<ClientConfig>) -> Api {
    Api::new(config.with_value(|c| c.urls.clone()), auth.with_untracked(|a| a.token().map(ToOwned::to_owned)))
}
