use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AppError, ErrorResponse, JsonOrForm, MessageResponse,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse},
};
use domain_recipes::RecipeRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateFoodReview, FoodReview};
use crate::repository::FoodReviewRepository;
use crate::service::FoodReviewService;

pub const FOOD_REVIEW_CREATED: &str = "Food review created successfully";
pub const FOOD_REVIEW_ACCEPTED: &str = "Food review accepted and added to recipes";
pub const FETCH_FOOD_REVIEWS_FAILED: &str = "Failed to fetch food reviews";
pub const CREATE_FOOD_REVIEW_FAILED: &str = "Failed to create food review";
pub const FETCH_FOOD_REVIEW_FAILED: &str = "Failed to fetch food review";
pub const ACCEPT_FOOD_REVIEW_FAILED: &str = "Failed to accept food review";

/// OpenAPI documentation for Food Reviews API
#[derive(OpenApi)]
#[openapi(
    paths(list_reviews, create_review, get_review, accept_review),
    components(
        schemas(FoodReview, CreateFoodReview, MessageResponse, ErrorResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Food Reviews", description = "Proposed recipes and their acceptance")
    )
)]
pub struct ApiDoc;

type SharedService<R, P> = Arc<FoodReviewService<R, P>>;

/// Create the food reviews router with all HTTP endpoints
pub fn router<R, P>(service: FoodReviewService<R, P>) -> Router
where
    R: FoodReviewRepository + 'static,
    P: RecipeRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_reviews).post(create_review))
        .route("/{id}", get(get_review))
        .route("/{id}/accept", post(accept_review))
        .with_state(shared_service)
}

/// List all food reviews
#[utoipa::path(
    get,
    path = "",
    tag = "Food Reviews",
    responses(
        (status = 200, description = "All food reviews", body = Vec<FoodReview>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_reviews<R: FoodReviewRepository, P: RecipeRepository>(
    State(service): State<SharedService<R, P>>,
) -> Result<Json<Vec<FoodReview>>, AppError> {
    let reviews = service
        .list_reviews()
        .await
        .map_err(|e| e.into_app_error(FETCH_FOOD_REVIEWS_FAILED))?;
    Ok(Json(reviews))
}

/// Submit a food review from a JSON or URL-encoded body
#[utoipa::path(
    post,
    path = "",
    tag = "Food Reviews",
    request_body(
        content((CreateFoodReview = "application/json"), (CreateFoodReview = "application/x-www-form-urlencoded"))
    ),
    responses(
        (status = 201, description = "Food review created", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_review<R: FoodReviewRepository, P: RecipeRepository>(
    State(service): State<SharedService<R, P>>,
    JsonOrForm(input): JsonOrForm<CreateFoodReview>,
) -> Result<impl IntoResponse, AppError> {
    service
        .create_review(input)
        .await
        .map_err(|e| e.into_app_error(CREATE_FOOD_REVIEW_FAILED))?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(FOOD_REVIEW_CREATED)),
    ))
}

/// Get a food review by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Food Reviews",
    params(
        ("id" = String, Path, description = "Food review id (24 hex digits)")
    ),
    responses(
        (status = 200, description = "Food review found", body = FoodReview),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_review<R: FoodReviewRepository, P: RecipeRepository>(
    State(service): State<SharedService<R, P>>,
    Path(id): Path<String>,
) -> Result<Json<FoodReview>, AppError> {
    let review = service
        .get_review(&id)
        .await
        .map_err(|e| e.into_app_error(FETCH_FOOD_REVIEW_FAILED))?;
    Ok(Json(review))
}

/// Promote a food review to a recipe
///
/// Not idempotent: each call adds another recipe.
#[utoipa::path(
    post,
    path = "/{id}/accept",
    tag = "Food Reviews",
    params(
        ("id" = String, Path, description = "Food review id (24 hex digits)")
    ),
    responses(
        (status = 201, description = "Recipe created from the review", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn accept_review<R: FoodReviewRepository, P: RecipeRepository>(
    State(service): State<SharedService<R, P>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    service
        .accept_review(&id)
        .await
        .map_err(|e| e.into_app_error(ACCEPT_FOOD_REVIEW_FAILED))?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(FOOD_REVIEW_ACCEPTED)),
    ))
}
