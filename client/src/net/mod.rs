//! Networking for the auth and task services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every REST call the pages make. Endpoint paths and wire types
//! live in the shared `model` crate.

pub mod api;
