//! Recipe Service - Business logic layer

use axum_helpers::describe_validation_errors;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{RecipeError, RecipeResult};
use crate::models::{CreateRecipe, NewRecipe, Recipe};
use crate::repository::RecipeRepository;

/// Recipe service providing business logic operations
///
/// Validation happens here, before the repository is touched.
pub struct RecipeService<R: RecipeRepository> {
    repository: Arc<R>,
}

impl<R: RecipeRepository> RecipeService<R> {
    /// Create a new RecipeService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every stored recipe
    #[instrument(skip(self))]
    pub async fn list_recipes(&self) -> RecipeResult<Vec<Recipe>> {
        self.repository.list().await
    }

    /// Validate and store a new recipe, returning its id
    #[instrument(skip(self, input))]
    pub async fn create_recipe(&self, input: CreateRecipe) -> RecipeResult<String> {
        let recipe = NewRecipe::try_from(input)
            .map_err(|e| RecipeError::Validation(describe_validation_errors(&e)))?;

        self.repository.create(recipe).await
    }

    /// Get a recipe by id
    #[instrument(skip(self))]
    pub async fn get_recipe(&self, id: &str) -> RecipeResult<Recipe> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| RecipeError::NotFound(id.to_string()))
    }
}

impl<R: RecipeRepository> Clone for RecipeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
