//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned for each request handler
//! through Axum's state extraction. All fields are cheap to clone: the
//! database connection is a pooled handle and the directory is
//! reference-counted.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::service::discord::GuildDirectory;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Guild directory used for authorization lookups.
    ///
    /// Behind a trait object so the Discord REST implementation can be
    /// swapped out in tests.
    pub directory: Arc<dyn GuildDirectory>,
}

impl AppState {
    /// Creates the application state from initialized dependencies.
    pub fn new(db: DatabaseConnection, directory: Arc<dyn GuildDirectory>) -> Self {
        Self { db, directory }
    }
}
