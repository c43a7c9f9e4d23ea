//! Bearer token inspection.
//!
//! The token is a JWT signed by the auth service. Clients never verify it;
//! they only read the payload to learn who is signed in and whether to show
//! admin-only controls. The services remain the authority on access.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::user::Role;

/// Failure to read claims out of a bearer token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token must have three dot-separated segments, found {0}")]
    Segments(usize),
    #[error("token payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not valid claims JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token has no subject")]
    MissingSubject,
}

/// Claims issued by `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username.
    pub sub: String,
    #[serde(default)]
    pub role: Role,
}

impl Claims {
    /// Decode the payload segment of a JWT without checking its signature.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] when the token is not a well-formed JWT or has
    /// an empty subject.
    pub fn decode_unverified(token: &str) -> Result<Self, TokenError> {
        let segments: Vec<&str> = token.trim().split('.').collect();
        if segments.len() != 3 {
            return Err(TokenError::Segments(segments.len()));
        }
        let payload = segments[1].trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD.decode(payload)?;
        let claims: Self = serde_json::from_slice(&bytes)?;
        if claims.sub.trim().is_empty() {
            return Err(TokenError::MissingSubject);
        }
        Ok(claims)
    }
}

/// A signed-in user: the raw token plus what it says about them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub claims: Claims,
}

impl Session {
    /// # Errors
    ///
    /// See [`Claims::decode_unverified`].
    pub fn from_token(token: impl Into<String>) -> Result<Self, TokenError> {
        let token = token.into().trim().to_owned();
        let claims = Claims::decode_unverified(&token)?;
        Ok(Self { token, claims })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.claims.sub
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.claims.role
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.claims.role == Role::Admin
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> String {
        bearer(&self.token)
    }
}

/// Format an `Authorization` header value for a raw token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
