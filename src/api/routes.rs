//! API route configuration.

use crate::api::handlers::{
    create_url_handler, delete_url_handler, get_url_handler, list_urls_handler, top_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Link management and analytics routes.
///
/// # Endpoints
///
/// - `POST   /urls`           - Create a short link
/// - `GET    /urls`           - List all short links
/// - `GET    /urls/{id}`      - Get one short link
/// - `DELETE /urls/{id}`      - Delete a short link and its access history
/// - `GET    /analytics/top`  - Most visited links, all-time or windowed
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", get(list_urls_handler).post(create_url_handler))
        .route("/urls/{id}", get(get_url_handler).delete(delete_url_handler))
        .route("/analytics/top", get(top_handler))
}
