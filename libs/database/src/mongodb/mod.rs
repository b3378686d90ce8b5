//! MongoDB connector and utilities
//!
//! Provides connection management and database resolution for the store handle
//! shared by every repository.

mod config;
mod connector;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{
    MongoError, close, connect_from_config, connect_from_config_with_retry, ping, resolve_database,
};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
