//! Library surface of the API server, exposed for integration tests.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
