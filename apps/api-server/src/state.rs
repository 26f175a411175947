//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{AuthorRepository, PostRepository};
use quill_infra::database::DatabaseConfig;
use quill_infra::memory::{InMemoryAuthorRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use quill_infra::database::{PostgresAuthorRepository, PostgresPostRepository, connect};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<dyn AuthorRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// State backed by the in-memory store.
    pub fn in_memory() -> Self {
        Self {
            authors: Arc::new(InMemoryAuthorRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
        }
    }

    /// Build the application state with the appropriate store.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match connect(config).await {
                    Ok(db) => {
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            authors: Arc::new(PostgresAuthorRepository::new(db.clone())),
                            posts: Arc::new(PostgresPostRepository::new(db)),
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using the in-memory store.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Using the in-memory store.");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = db_config;
            tracing::info!("Built without postgres support - using the in-memory store");
        }

        Self::in_memory()
    }
}
