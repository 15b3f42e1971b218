//! Handler for link rankings.

use axum::{Json, extract::State};

use crate::api::dto::analytics::{TopQueryParams, TopUrlResponse};
use crate::api::extract::ValidQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the most visited short links.
///
/// # Endpoint
///
/// `GET /analytics/top?window=24h&limit=10`
///
/// # Query Parameters
///
/// - `window` - optional trailing window (`7d`, `24h`, `30m`, `10s`). Without
///   it links are ranked by their all-time click count.
/// - `limit` - ranking size, defaults to the configured default (10). Values
///   above the configured maximum are clamped.
///
/// # Response
///
/// ```json
/// [
///   {
///     "shortCode": "AAAAAAAAAAE",
///     "originalUrl": "https://example.com/",
///     "clickCount": 42,
///     "lastAccessedAt": "2025-01-01T12:00:00Z"
///   }
/// ]
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an unparseable window, a non-numeric limit or
/// a limit below 1.
pub async fn top_handler(
    ValidQuery(params): ValidQuery<TopQueryParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<TopUrlResponse>>, AppError> {
    let service = &state.analytics_service;
    let limit = params.limit.unwrap_or_else(|| service.default_limit());

    let ranking = service
        .top_by_window(params.window.as_deref(), limit)
        .await?;

    Ok(Json(ranking.into_iter().map(TopUrlResponse::from).collect()))
}
