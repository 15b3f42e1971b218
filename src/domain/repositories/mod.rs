//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence ports of the service. The domain and
//! application layers only talk to them, never to a database client.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Identity assignment, lookups and deletion
//! - [`ClickRepository`] - Atomic click tracking and rankings
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod click_repository;
pub mod link_repository;

pub use click_repository::{ClickRepository, TopLink, TrackedClick};
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
