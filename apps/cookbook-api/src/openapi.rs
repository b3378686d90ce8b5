//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cookbook API",
        version = "0.1.0",
        description = "Recipes, food reviews, and promotion of reviews to recipes"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/api/recipes", api = domain_recipes::ApiDoc),
        (path = "/api/food-reviews", api = domain_food_reviews::ApiDoc)
    ),
    tags(
        (name = "Recipes", description = "Recipe endpoints (MongoDB)"),
        (name = "Food Reviews", description = "Proposed recipes and their acceptance")
    )
)]
pub struct ApiDoc;
