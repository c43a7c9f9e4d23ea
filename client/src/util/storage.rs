//! Browser `localStorage` access for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token survives reloads under the `token` key. These helpers keep the
//! hydrate-only web-sys glue in one place; on the server they no-op.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored token, ignoring blank values.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(TOKEN_KEY).ok().flatten()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
