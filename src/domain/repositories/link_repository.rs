//! Repository trait for short link identity storage.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Owns identity assignment and the code → URL mapping. Click counters live on
/// the same records but are only mutated through
/// [`crate::domain::repositories::ClickRepository`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// The store assigns a fresh identity, derives the short code from it and
    /// writes the code back onto the same record. Both writes belong to one
    /// unit of work: either the finished, code-bearing record is committed or
    /// nothing is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or if no code can be
    /// derived from the assigned identity.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code (exact match).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Finds a link by its identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ShortLink>, AppError>;

    /// Lists every link. Callers must not rely on the order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError>;

    /// Deletes a link together with its access events.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if no record
    /// had this identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
