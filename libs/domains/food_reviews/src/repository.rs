use async_trait::async_trait;

use crate::error::FoodReviewResult;
use crate::models::{FoodReview, NewFoodReview};

/// Repository trait for FoodReview persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodReviewRepository: Send + Sync {
    /// Store a new review and return its assigned id
    async fn create(&self, input: NewFoodReview) -> FoodReviewResult<String>;

    /// All stored reviews, in no particular order
    async fn list(&self) -> FoodReviewResult<Vec<FoodReview>>;

    /// `Ok(None)` when no review has this id, `InvalidId` when `id` is not a
    /// well-formed identifier
    async fn get_by_id(&self, id: &str) -> FoodReviewResult<Option<FoodReview>>;
}
