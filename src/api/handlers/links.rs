//! Handlers for short link management.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::short_link::{CreateUrlRequest, UrlResponse};
use crate::api::extract::{ValidJson, ValidPath};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "id": 1,
///   "originalUrl": "https://example.com/page",
///   "shortCode": "AAAAAAAAAAE",
///   "createdAt": "2025-01-01T00:00:00Z",
///   "clickCount": 0,
///   "lastAccessedAt": null
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or a blank, relative or
/// non-HTTP(S) URL.
pub async fn create_url_handler(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateUrlRequest>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(&payload.original_url)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists every short link.
///
/// # Endpoint
///
/// `GET /urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(UrlResponse::from).collect()))
}

/// Returns one short link by identity.
///
/// # Endpoint
///
/// `GET /urls/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this identity.
pub async fn get_url_handler(
    ValidPath(id): ValidPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>, AppError> {
    state
        .link_service
        .get_link(id)
        .await?
        .map(|link| Json(link.into()))
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
}

/// Deletes a short link together with its access history.
///
/// # Endpoint
///
/// `DELETE /urls/{id}`
///
/// # Response
///
/// `204 No Content` on success.
///
/// # Errors
///
/// Returns 404 Not Found if no link has this identity.
pub async fn delete_url_handler(
    ValidPath(id): ValidPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if state.link_service.delete_link(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(
            "Short link not found",
            json!({ "id": id }),
        ))
    }
}
