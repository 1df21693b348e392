//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostStore;
use quill_infra::InMemoryPostStore;
use quill_infra::store::DatabaseConfig;

/// Shared application state holding the injected store handle.
///
/// The store is the only shared mutable resource; handlers perform exactly
/// one store interaction per request.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Build the application state with the appropriate store implementation.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostStore> = {
            if let Some(config) = db_config {
                match quill_infra::connect(config).await {
                    Ok(conn) => Arc::new(quill_infra::PostgresPostStore::new(conn)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostStore::new())
                    }
                }
            } else {
                tracing::warn!("No database URL set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostStore::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostStore> = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory store");
            Arc::new(InMemoryPostStore::new())
        };

        tracing::info!("Application state initialized");

        Self { posts }
    }

    /// State over an explicit store. Tests use this to substitute an
    /// isolated instance per run.
    pub fn with_store(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }
}
