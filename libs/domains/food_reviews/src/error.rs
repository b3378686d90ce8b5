use axum_helpers::AppError;
use domain_recipes::RecipeError;
use thiserror::Error;

/// Client-facing message for both a missing review and a malformed id.
pub const FOOD_REVIEW_NOT_FOUND: &str = "Food review not found";

#[derive(Debug, Error)]
pub enum FoodReviewError {
    #[error("{0}")]
    Validation(String),

    #[error("Food review not found: {0}")]
    NotFound(String),

    #[error("Invalid food review id: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(String),

    /// Writing the promoted recipe failed
    #[error("Recipe store error: {0}")]
    Recipe(#[from] RecipeError),
}

pub type FoodReviewResult<T> = Result<T, FoodReviewError>;

impl FoodReviewError {
    /// Converts into the HTTP error, using `failure` as the client message for
    /// store errors. The store's own message is only logged.
    pub fn into_app_error(self, failure: &str) -> AppError {
        match self {
            FoodReviewError::Validation(msg) => AppError::BadRequest(msg),
            FoodReviewError::NotFound(id) => {
                tracing::debug!(review_id = %id, "Food review does not exist");
                AppError::NotFound(FOOD_REVIEW_NOT_FOUND.to_string())
            }
            FoodReviewError::InvalidId(id) => {
                tracing::debug!(review_id = %id, "Malformed food review id");
                AppError::NotFound(FOOD_REVIEW_NOT_FOUND.to_string())
            }
            FoodReviewError::Database(cause) => {
                tracing::error!(error = %cause, "{}", failure);
                AppError::InternalServerError(failure.to_string())
            }
            FoodReviewError::Recipe(cause) => {
                tracing::error!(error = %cause, "{}", failure);
                AppError::InternalServerError(failure.to_string())
            }
        }
    }
}

impl From<mongodb::error::Error> for FoodReviewError {
    fn from(err: mongodb::error::Error) -> Self {
        FoodReviewError::Database(err.to_string())
    }
}
