//! Data Transfer Objects for API requests and responses.
//!
//! JSON bodies use camelCase field names. Request bodies are checked with
//! `validator` before reaching the services.

pub mod analytics;
pub mod health;
pub mod short_link;
