//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render task, user, and dashboard pieces while reading shared
//! state from Leptos context providers.

pub mod charts;
pub mod nav_bar;
pub mod progress_bar;
pub mod register_form;
pub mod task_form;
pub mod task_table;
pub mod user_card;
