//! Access event entity representing a single successful redirect.

use chrono::{DateTime, Utc};

/// One timestamped redirect hit.
///
/// Events are append-only. `short_link_id` is a back-reference to the owning
/// [`crate::domain::entities::ShortLink`]; the event is removed together with
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEvent {
    pub id: i64,
    pub short_link_id: i64,
    pub accessed_at: DateTime<Utc>,
}

impl AccessEvent {
    /// Creates a new AccessEvent instance.
    pub fn new(id: i64, short_link_id: i64, accessed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_link_id,
            accessed_at,
        }
    }
}
