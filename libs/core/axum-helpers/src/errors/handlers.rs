use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

pub const ROUTE_NOT_FOUND: &str = "The requested resource was not found";

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback for unmatched paths.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(ROUTE_NOT_FOUND)),
    )
        .into_response()
}
