//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence concerns; the
//! PostgreSQL adapters map their rows onto these types.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A shortened URL with its click counter
//! - [`AccessEvent`] - One recorded redirect hit
//!
//! # Design Pattern
//!
//! Creation uses a separate input struct ([`NewShortLink`]) because the
//! identity and the short code only exist once the store has assigned them.

pub mod access_event;
pub mod short_link;

pub use access_event::AccessEvent;
pub use short_link::{NewShortLink, ShortLink};
