//! Repository implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL storage through SQLx
//! - [`InMemoryLinkRepository`] - Process-local storage for tests and
//!   throwaway deployments

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
