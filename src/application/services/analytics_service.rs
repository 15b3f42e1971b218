//! Top-link rankings, all-time and windowed.

use std::sync::Arc;

use crate::domain::repositories::{ClickRepository, TopLink};
use crate::domain::window::window_start;
use crate::error::AppError;
use chrono::Utc;
use serde_json::json;
use tracing::debug;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 1000;

/// Service answering "which links are most visited".
pub struct AnalyticsService<C: ClickRepository> {
    repository: Arc<C>,
    default_limit: i64,
    max_limit: i64,
}

impl<C: ClickRepository> AnalyticsService<C> {
    /// Creates a service with [`DEFAULT_LIMIT`] and [`MAX_LIMIT`].
    pub fn new(repository: Arc<C>) -> Self {
        Self::with_limits(repository, DEFAULT_LIMIT, MAX_LIMIT)
    }

    /// Creates a service with explicit limit settings.
    ///
    /// `max_limit` is raised to at least 1 and `default_limit` is kept within
    /// `1..=max_limit`.
    pub fn with_limits(repository: Arc<C>, default_limit: i64, max_limit: i64) -> Self {
        let max_limit = max_limit.max(1);
        Self {
            repository,
            default_limit: default_limit.clamp(1, max_limit),
            max_limit,
        }
    }

    pub fn default_limit(&self) -> i64 {
        self.default_limit
    }

    pub fn max_limit(&self) -> i64 {
        self.max_limit
    }

    /// Returns the most visited links.
    ///
    /// Without a window (or with a blank one) links are ranked by their stored
    /// click counter. With a window such as `"24h"` they are ranked by the
    /// number of access events recorded since `now - window`; links with no
    /// events inside the window are left out.
    ///
    /// Equal counts are ordered by short code ascending. `limit` above the
    /// configured maximum is clamped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unparseable window or a limit
    /// below 1. The store is not queried in either case.
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn top_by_window(
        &self,
        window: Option<&str>,
        limit: i64,
    ) -> Result<Vec<TopLink>, AppError> {
        let window = window.map(str::trim).filter(|w| !w.is_empty());

        let since = match window {
            Some(raw) => Some(window_start(raw, Utc::now())?),
            None => None,
        };

        let limit = self.effective_limit(limit)?;

        match since {
            Some(since) => {
                debug!(%since, limit, "Ranking links by recent access events");
                self.repository.top_since(since, limit).await
            }
            None => {
                debug!(limit, "Ranking links by click count");
                self.repository.top_by_click_count(limit).await
            }
        }
    }

    fn effective_limit(&self, limit: i64) -> Result<i64, AppError> {
        if limit < 1 {
            return Err(AppError::bad_request(
                "Invalid limit",
                json!({
                    "limit": limit,
                    "expected": format!("integer between 1 and {}", self.max_limit),
                }),
            ));
        }

        Ok(limit.min(self.max_limit))
    }
}
