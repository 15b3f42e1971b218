//! Short link entity representing a code → URL mapping with click metrics.

use chrono::{DateTime, Utc};

/// A shortened URL together with its click counter.
///
/// `id` is assigned by the store and `short_code` is derived from it, so both
/// are fixed once the record is committed. Only the click tracker changes
/// `click_count` and `last_accessed_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        click_count: i64,
        last_accessed_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            click_count,
            last_accessed_at,
        }
    }

    /// Returns true if the link has never been resolved.
    pub fn is_unvisited(&self) -> bool {
        self.last_accessed_at.is_none()
    }
}

/// Input data for creating a new short link.
///
/// Carries only the target URL: the identity and the code are produced by the
/// store during creation.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub original_url: String,
}
