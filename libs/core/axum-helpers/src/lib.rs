//! # Axum Helpers
//!
//! Shared building blocks for the cookbook HTTP services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, optional OpenAPI route, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS)
//! - **[`errors`]**: `{ "error": ... }` responses and the `AppError` type
//! - **[`extractors`]**: Request body extractor accepting JSON or URL-encoded forms
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router, with_common_layers};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let api_routes = Router::new(); // Add your routes
//!     let app = with_common_layers(create_router(api_routes));
//!     create_production_app(app, &ServerConfig::default(), Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    ShutdownCoordinator, create_production_app, create_router, openapi_router, shutdown_signal,
    with_common_layers,
};

// Re-export HTTP middleware
pub use http::create_permissive_cors_layer;

// Re-export error types
pub use errors::{AppError, ErrorResponse, MessageResponse, describe_validation_errors};

// Re-export extractors
pub use extractors::JsonOrForm;
