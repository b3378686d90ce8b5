//! Application state management.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Built once in `main`; the client shares one connection pool across every
/// repository.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
