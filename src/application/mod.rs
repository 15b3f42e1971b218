//! Application layer services implementing business logic.
//!
//! Services consume repository traits and validate input before any storage
//! call, so HTTP handlers and the admin CLI share the same rules.
//!
//! # Available Services
//!
//! - [`services::LinkService`] - Short link creation, lookup and deletion
//! - [`services::ClickService`] - Redirect resolution with click tracking
//! - [`services::AnalyticsService`] - All-time and windowed top-link rankings

pub mod services;
