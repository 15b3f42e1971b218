//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Each successful redirect increments the link's click counter and records
/// one access event, atomically.
///
/// # Response
///
/// `302 Found` with the original URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist. Nothing is recorded
/// in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state
        .click_service
        .track_and_resolve(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
