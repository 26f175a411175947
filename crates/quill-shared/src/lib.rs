//! # Quill Shared
//!
//! Wire types shared between the server and API clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
