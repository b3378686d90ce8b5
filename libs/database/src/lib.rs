//! Database connectivity for the cookbook services.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, configuration and database resolution
//! - `config` - Loading `MongoConfig` through `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry, resolve_database};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017/cookbook");
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let db = resolve_database(&client, &config);
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};
