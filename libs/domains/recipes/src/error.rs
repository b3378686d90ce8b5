use axum_helpers::AppError;
use thiserror::Error;

/// Client-facing message for both a missing recipe and a malformed id.
pub const RECIPE_NOT_FOUND: &str = "Recipe not found";

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("{0}")]
    Validation(String),

    #[error("Recipe not found: {0}")]
    NotFound(String),

    #[error("Invalid recipe id: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type RecipeResult<T> = Result<T, RecipeError>;

impl RecipeError {
    /// Converts into the HTTP error, using `failure` as the client message for
    /// store errors. The store's own message is only logged.
    pub fn into_app_error(self, failure: &str) -> AppError {
        match self {
            RecipeError::Validation(msg) => AppError::BadRequest(msg),
            RecipeError::NotFound(id) => {
                tracing::debug!(recipe_id = %id, "Recipe does not exist");
                AppError::NotFound(RECIPE_NOT_FOUND.to_string())
            }
            RecipeError::InvalidId(id) => {
                tracing::debug!(recipe_id = %id, "Malformed recipe id");
                AppError::NotFound(RECIPE_NOT_FOUND.to_string())
            }
            RecipeError::Database(cause) => {
                tracing::error!(error = %cause, "{}", failure);
                AppError::InternalServerError(failure.to_string())
            }
        }
    }
}

impl From<mongodb::error::Error> for RecipeError {
    fn from(err: mongodb::error::Error) -> Self {
        RecipeError::Database(err.to_string())
    }
}
