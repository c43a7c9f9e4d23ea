//! Shared reactive state, provided through Leptos context as `RwSignal`s.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is app-wide; the rest are page-scoped and created by their pages.

pub mod auth;
pub mod dashboard;
pub mod tasks;
pub mod users;
