use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, ErrorResponse, JsonOrForm, MessageResponse,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateRecipe, Recipe};
use crate::repository::RecipeRepository;
use crate::service::RecipeService;

pub const RECIPE_CREATED: &str = "Recipe created successfully";
pub const FETCH_RECIPES_FAILED: &str = "Failed to fetch recipes";
pub const CREATE_RECIPE_FAILED: &str = "Failed to create recipe";
pub const FETCH_RECIPE_FAILED: &str = "Failed to fetch recipe";

/// OpenAPI documentation for Recipes API
#[derive(OpenApi)]
#[openapi(
    paths(list_recipes, create_recipe, get_recipe),
    components(
        schemas(Recipe, CreateRecipe, MessageResponse, ErrorResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Recipes", description = "Recipe endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the recipes router with all HTTP endpoints
pub fn router<R: RecipeRepository + 'static>(service: RecipeService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_recipes).post(create_recipe))
        .route("/{id}", get(get_recipe))
        .with_state(shared_service)
}

/// List all recipes
#[utoipa::path(
    get,
    path = "",
    tag = "Recipes",
    responses(
        (status = 200, description = "All recipes", body = Vec<Recipe>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_recipes<R: RecipeRepository>(
    State(service): State<Arc<RecipeService<R>>>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let recipes = service
        .list_recipes()
        .await
        .map_err(|e| e.into_app_error(FETCH_RECIPES_FAILED))?;
    Ok(Json(recipes))
}

/// Create a recipe from a JSON or URL-encoded body
#[utoipa::path(
    post,
    path = "",
    tag = "Recipes",
    request_body(
        content((CreateRecipe = "application/json"), (CreateRecipe = "application/x-www-form-urlencoded"))
    ),
    responses(
        (status = 201, description = "Recipe created", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_recipe<R: RecipeRepository>(
    State(service): State<Arc<RecipeService<R>>>,
    JsonOrForm(input): JsonOrForm<CreateRecipe>,
) -> Result<impl IntoResponse, AppError> {
    service
        .create_recipe(input)
        .await
        .map_err(|e| e.into_app_error(CREATE_RECIPE_FAILED))?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new(RECIPE_CREATED))))
}

/// Get a recipe by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Recipes",
    params(
        ("id" = String, Path, description = "Recipe id (24 hex digits)")
    ),
    responses(
        (status = 200, description = "Recipe found", body = Recipe),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_recipe<R: RecipeRepository>(
    State(service): State<Arc<RecipeService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = service
        .get_recipe(&id)
        .await
        .map_err(|e| e.into_app_error(FETCH_RECIPE_FAILED))?;
    Ok(Json(recipe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;
    use crate::models::NewRecipe;
    use crate::repository::MockRecipeRepository;
    use axum::body::Body;
    use axum::http::{Request, header::CONTENT_TYPE};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const ID: &str = "65a1f0c2e4b0a1b2c3d4e5f6";

    fn app(mock_repo: MockRecipeRepository) -> Router {
        router(RecipeService::new(mock_repo))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post(content_type: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, content_type)
            .body(body.into())
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_message() {
        let mut mock_repo = MockRecipeRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Ok(ID.to_string()));

        let body = json!({ "title": "Soup", "ingredients": ["water", "salt"], "instructions": "Boil" });
        let response = app(mock_repo)
            .oneshot(post("application/json", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            json_body(response).await,
            json!({ "message": "Recipe created successfully" })
        );
    }

    #[tokio::test]
    async fn test_create_accepts_form_body() {
        let mut mock_repo = MockRecipeRepository::new();
        mock_repo
            .expect_create()
            .withf(|input: &NewRecipe| {
                input.ingredients == ["water", "salt"] && input.image.as_deref() == Some("soup.png")
            })
            .returning(|_| Ok(ID.to_string()));

        let response = app(mock_repo)
            .oneshot(post(
                "application/x-www-form-urlencoded",
                "title=Soup&ingredients=water&ingredients=salt&instructions=Boil&image=soup.png",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_missing_fields_is_400() {
        let mut mock_repo = MockRecipeRepository::new();
        mock_repo.expect_create().never();

        let response = app(mock_repo)
            .oneshot(post("application/json", json!({ "title": "Soup" }).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"],
            "Missing or empty required fields: ingredients, instructions"
        );
    }

    #[tokio::test]
    async fn test_create_malformed_body_is_400() {
        let mut mock_repo = MockRecipeRepository::new();
        mock_repo.expect_create().never();

        let response = app(mock_repo)
            .oneshot(post("application/json", "{\"title\":"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_store_failure_is_500() {
        let mut mock_repo = MockRecipeRepository::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RecipeError::Database("no primary".to_string())));

        let body = json!({ "title": "Soup", "ingredients": [], "instructions": "Boil" });
        let response = app(mock_repo)
            .oneshot(post("application/json", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Failed to create recipe" })
        );
    }

    #[tokio::test]
    async fn test_list_returns_entities_with_ids() {
        let mut mock_repo = MockRecipeRepository::new();
        mock_repo.expect_list().returning(|| {
            Ok(vec![Recipe {
                id: ID.to_string(),
                title: "Soup".to_string(),
                ingredients: vec!["water".to_string()],
                instructions: "Boil".to_string(),
                image: None,
            }])
        });

        let response = app(mock_repo).oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!([{ "id": ID, "title": "Soup", "ingredients": ["water"], "instructions": "Boil" }])
        );
    }

    #[tokio::test]
    async fn test_list_store_failure_is_500() {
        let mut mock_repo = MockRecipeRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Err(RecipeError::Database("timeout".to_string())));

        let response = app(mock_repo).oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Failed to fetch recipes" })
        );
    }

    #[tokio::test]
    async fn test_get_missing_is_404() {
        let mut mock_repo = MockRecipeRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let response = app(mock_repo)
            .oneshot(get(&format!("/{}", ID)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await, json!({ "error": "Recipe not found" }));
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_404() {
        let mut mock_repo = MockRecipeRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Err(RecipeError::InvalidId(id.to_string())));

        let response = app(mock_repo)
            .oneshot(get("/does-not-exist"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await, json!({ "error": "Recipe not found" }));
    }

    #[tokio::test]
    async fn test_get_store_failure_is_500() {
        let mut mock_repo = MockRecipeRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RecipeError::Database("timeout".to_string())));

        let response = app(mock_repo)
            .oneshot(get(&format!("/{}", ID)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Failed to fetch recipe" })
        );
    }
}
