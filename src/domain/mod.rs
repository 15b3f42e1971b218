//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository interfaces and the pure pieces of domain logic,
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`window`] - Parsing of trailing analytics windows
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler receives a redirect request
//! 2. [`crate::application::services::ClickService`] asks the
//!    [`repositories::ClickRepository`] to track and resolve the code
//! 3. Counter increment, timestamp update and event append happen in one
//!    atomic store operation
//! 4. The resolved URL is returned to the handler

pub mod entities;
pub mod repositories;
pub mod window;
