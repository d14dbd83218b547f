//! Networking modules for the HTTP session API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST calls and `types` defines the JSON schema shared with
//! the server.

pub mod api;
pub mod types;
