//! Food Review Service - Business logic layer

use axum_helpers::describe_validation_errors;
use domain_recipes::{NewRecipe, RecipeRepository};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{FoodReviewError, FoodReviewResult};
use crate::models::{CreateFoodReview, FoodReview, NewFoodReview};
use crate::repository::FoodReviewRepository;

/// Food review service
///
/// Holds the review store and the recipe store, since accepting a review
/// writes a recipe.
pub struct FoodReviewService<R: FoodReviewRepository, P: RecipeRepository> {
    reviews: Arc<R>,
    recipes: Arc<P>,
}

impl<R: FoodReviewRepository, P: RecipeRepository> FoodReviewService<R, P> {
    pub fn new(reviews: R, recipes: P) -> Self {
        Self {
            reviews: Arc::new(reviews),
            recipes: Arc::new(recipes),
        }
    }

    /// List every stored review
    #[instrument(skip(self))]
    pub async fn list_reviews(&self) -> FoodReviewResult<Vec<FoodReview>> {
        self.reviews.list().await
    }

    /// Validate and store a new review, returning its id
    #[instrument(skip(self, input))]
    pub async fn create_review(&self, input: CreateFoodReview) -> FoodReviewResult<String> {
        let review = NewFoodReview::try_from(input)
            .map_err(|e| FoodReviewError::Validation(describe_validation_errors(&e)))?;

        self.reviews.create(review).await
    }

    /// Get a review by id
    #[instrument(skip(self))]
    pub async fn get_review(&self, id: &str) -> FoodReviewResult<FoodReview> {
        self.reviews
            .get_by_id(id)
            .await?
            .ok_or_else(|| FoodReviewError::NotFound(id.to_string()))
    }

    /// Copy a review into the recipe collection and return the new recipe id.
    ///
    /// The review itself is left untouched. Accepting the same review again
    /// creates another, independent recipe. The read and the write are not
    /// atomic.
    #[instrument(skip(self))]
    pub async fn accept_review(&self, id: &str) -> FoodReviewResult<String> {
        let review = self.get_review(id).await?;
        let recipe_id = self.recipes.create(NewRecipe::from(review)).await?;

        tracing::info!(review_id = %id, recipe_id = %recipe_id, "Food review accepted");
        Ok(recipe_id)
    }
}

impl<R: FoodReviewRepository, P: RecipeRepository> Clone for FoodReviewService<R, P> {
    fn clone(&self) -> Self {
        Self {
            reviews: Arc::clone(&self.reviews),
            recipes: Arc::clone(&self.recipes),
        }
    }
}
