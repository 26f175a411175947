//! # Quill Core
//!
//! The domain layer of the Quill blog backend: entities, reference
//! resolution, partial-update validation, and the author cascade delete.
//! This crate contains pure business logic with zero infrastructure
//! dependencies.

pub mod cascade;
pub mod domain;
pub mod error;
pub mod ports;
pub mod resolve;
pub mod update;

pub use error::DomainError;

#[cfg(test)]
pub(crate) mod test_support;
