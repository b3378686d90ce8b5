//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with the `/api` prefix and a JSON 404 fallback
//! - Common layers (request tracing, permissive CORS, compression)
//! - An optional route serving the OpenAPI document
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, with_common_layers};
//!
//! let app = with_common_layers(create_router(api_routes));
//! create_production_app(app, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{
    OPENAPI_PATH, create_production_app, create_router, openapi_router, with_common_layers,
};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
