//! Repository trait for click tracking and ranking queries.

use crate::domain::entities::AccessEvent;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Outcome of a successful tracked resolution.
///
/// `event.accessed_at` is also the new `last_accessed_at` of the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedClick {
    pub original_url: String,
    pub event: AccessEvent,
}

/// One row of an analytics ranking.
///
/// For all-time rankings `click_count` and `last_accessed_at` are the stored
/// counter values. For windowed rankings they are the number of events inside
/// the window and the latest of those events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLink {
    pub short_code: String,
    pub original_url: String,
    pub click_count: i64,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

/// Repository interface for click tracking and analytics.
///
/// Rankings are ordered by count descending, then by short code ascending in
/// byte order, so equal counts always come back in the same order.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_click.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Atomically counts a hit on `code` and returns its target.
    ///
    /// In a single atomic operation: increments `click_count` by one, sets
    /// `last_accessed_at` to the current time and appends one access event
    /// with that same timestamp. Concurrent calls never lose an increment.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(TrackedClick))` if the code exists
    /// - `Ok(None)` if it does not; nothing is written in that case
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn track_and_resolve(&self, code: &str) -> Result<Option<TrackedClick>, AppError>;

    /// Ranks links by their stored all-time counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn top_by_click_count(&self, limit: i64) -> Result<Vec<TopLink>, AppError>;

    /// Ranks links by the number of access events at or after `since`.
    ///
    /// Links without events in the window are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn top_since(&self, since: DateTime<Utc>, limit: i64)
    -> Result<Vec<TopLink>, AppError>;

    /// Counts access events of one link, optionally from `since` onwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_access_events(
        &self,
        short_link_id: i64,
        since: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError>;
}
