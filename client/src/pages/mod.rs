//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, refetches) and
//! delegates rendering details to `components`.

pub mod admin;
pub mod login;
pub mod register;
pub mod task_detail;
pub mod tasks;
pub mod users;
