//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies (camelCase JSON)
//! - [`extract`] - Extractors rejecting with the JSON error envelope
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration
pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
