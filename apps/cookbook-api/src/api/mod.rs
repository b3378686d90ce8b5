//! API routes module
//!
//! Route table:
//!
//! | Method | Path                             |
//! |--------|----------------------------------|
//! | GET    | `/`                              |
//! | GET    | `/api/recipes`                   |
//! | POST   | `/api/recipes`                   |
//! | GET    | `/api/recipes/{id}`              |
//! | GET    | `/api/food-reviews`              |
//! | POST   | `/api/food-reviews`              |
//! | GET    | `/api/food-reviews/{id}`         |
//! | POST   | `/api/food-reviews/{id}/accept`  |
//!
//! `/api-docs/openapi.json` is added only when API docs are enabled.

pub mod food_reviews;
pub mod recipes;

use axum::{Router, routing::get};
use axum_helpers::server::{create_router, openapi_router, with_common_layers};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Liveness response body
pub const HELLO: &str = "Hello World";

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/recipes", recipes::router(state))
        .nest("/food-reviews", food_reviews::router(state))
}

/// Complete application: API routes, liveness route, optional OpenAPI
/// document and the common middleware stack.
pub fn app(state: &AppState) -> Router {
    let mut router = create_router(routes(state)).route("/", get(hello));

    if state.config.api_docs {
        router = router.merge(openapi_router::<ApiDoc>());
    }

    with_common_layers(router)
}

async fn hello() -> &'static str {
    HELLO
}
