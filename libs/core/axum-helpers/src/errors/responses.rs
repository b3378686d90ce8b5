//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - the store failed",
    content_type = "application/json",
    example = json!({ "error": "Failed to fetch recipes" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - required fields missing or body malformed",
    content_type = "application/json",
    example = json!({ "error": "Missing or empty required fields: instructions, title" })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "error": "Recipe not found" })
)]
pub struct NotFoundResponse(pub ErrorResponse);
