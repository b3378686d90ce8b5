//! Recipes API routes

use axum::Router;
use domain_recipes::{MongoRecipeRepository, RecipeService, handlers};

use crate::state::AppState;

/// Create recipes router
pub fn router(state: &AppState) -> Router {
    let repository = MongoRecipeRepository::new(&state.db);
    handlers::router(RecipeService::new(repository))
}
