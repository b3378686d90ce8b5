use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::RetryConfig;
use database::mongodb::{close, connect_from_config_with_retry, resolve_database};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        "Connecting to MongoDB at {}",
        config.mongodb.redacted_url()
    );

    let mongo_client =
        connect_from_config_with_retry(&config.mongodb, Some(RetryConfig::new())).await?;
    let db = resolve_database(&mongo_client, &config.mongodb);

    info!("Successfully connected to MongoDB database: {}", db.name());

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let app = api::app(&state);
    if state.config.api_docs {
        info!("Serving OpenAPI document at {}", axum_helpers::server::OPENAPI_PATH);
    }

    let client = state.mongo_client.clone();
    info!("Starting Cookbook API with graceful shutdown ({:?} timeout)", SHUTDOWN_TIMEOUT);

    create_production_app(app, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        close(client).await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Cookbook API shutdown complete");
    Ok(())
}
