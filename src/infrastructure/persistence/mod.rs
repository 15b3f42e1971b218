//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters and `FromRow` row mapping.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Identity assignment, code write-back, lookups, deletion
//! - [`PgClickRepository`] - Atomic click tracking and ranking queries

pub mod pg_click_repository;
pub mod pg_link_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
