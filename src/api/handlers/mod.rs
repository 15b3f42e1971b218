//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod health;
pub mod links;
pub mod redirect;

pub use analytics::top_handler;
pub use health::health_handler;
pub use links::{create_url_handler, delete_url_handler, get_url_handler, list_urls_handler};
pub use redirect::redirect_handler;
