//! # client
//!
//! Leptos + WASM frontend for the task tracker.
//!
//! This crate contains the routed pages (login, registration, task list and
//! detail, users, admin dashboard), their components, browser-side state, and
//! the REST layer that talks to the auth and task services. Wire types and
//! form rules come from the shared `model` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
