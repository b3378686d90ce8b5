use tower_http::cors::{Any, CorsLayer};

/// CORS layer that accepts requests from any origin.
///
/// Any method and any request header are allowed; credentials are not, which
/// `Access-Control-Allow-Origin: *` would forbid anyway.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
