//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory store only, no external dependencies
//! - `postgres` - PostgreSQL store via SeaORM

pub mod database;
pub mod memory;

pub use memory::{InMemoryAuthorRepository, InMemoryPostRepository};

pub use database::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use database::{PostgresAuthorRepository, PostgresPostRepository};
