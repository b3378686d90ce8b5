//! Food reviews API routes
//!
//! The service gets its own recipe repository over the same database, so
//! accepted reviews land in the collection the recipes routes read.

use axum::Router;
use domain_food_reviews::{FoodReviewService, MongoFoodReviewRepository, handlers};
use domain_recipes::MongoRecipeRepository;

use crate::state::AppState;

/// Create food reviews router
pub fn router(state: &AppState) -> Router {
    let service = FoodReviewService::new(
        MongoFoodReviewRepository::new(&state.db),
        MongoRecipeRepository::new(&state.db),
    );
    handlers::router(service)
}
