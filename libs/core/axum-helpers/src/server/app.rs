use super::shutdown::{ShutdownCoordinator, coordinated_shutdown};
use crate::errors::handlers::not_found;
use crate::http::create_permissive_cors_layer;
use axum::{Json, Router, routing::get};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Path of the generated OpenAPI document when it is enabled.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Nests `apis` under `/api` and installs the JSON 404 fallback.
///
/// Routers with their state already applied should be passed in; merge any
/// routes that live outside `/api` into the result before layering.
pub fn create_router(apis: Router) -> Router {
    Router::new().nest("/api", apis).fallback(not_found)
}

/// Router serving `T`'s OpenAPI document as JSON at [`OPENAPI_PATH`].
pub fn openapi_router<T>() -> Router
where
    T: OpenApi + 'static,
{
    let doc = T::openapi();
    Router::new().route(OPENAPI_PATH, get(move || async move { Json(doc) }))
}

/// Applies request tracing, permissive CORS and response compression.
pub fn with_common_layers(router: Router) -> Router {
    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(create_permissive_cors_layer())
        // gzip, br, deflate, zstd based on Accept-Encoding
        .layer(CompressionLayer::new())
}

/// Production-ready server with coordinated shutdown and cleanup.
///
/// `cleanup` runs once a shutdown signal arrives and is abandoned if it takes
/// longer than `shutdown_timeout`.
///
/// # Example
/// ```ignore
/// let cleanup = async move { database::mongodb::close(client).await };
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();
    let signal_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        // Fires once the signal handler below initiates shutdown
        let _ = shutdown_rx.recv().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                );
            }
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinated_shutdown(signal_handle))
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Make sure cleanup runs even when serving failed before any signal
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "Test API"))]
    struct TestDoc;

    fn app() -> Router {
        let apis = Router::new().route("/things", get(|| async { "things" }));
        with_common_layers(create_router(apis).merge(openapi_router::<TestDoc>()))
    }

    async fn get_path(path: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_api_routes_are_nested() {
        let (status, body) = get_path("/api/things").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"things");
    }

    #[tokio::test]
    async fn test_unknown_route_uses_json_fallback() {
        let (status, body) = get_path("/things").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], crate::errors::handlers::ROUTE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (status, body) = get_path(OPENAPI_PATH).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["info"]["title"], "Test API");
    }
}
