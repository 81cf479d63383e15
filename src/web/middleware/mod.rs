//! Web-specific middleware.

pub mod tracing;
pub mod web_auth;
