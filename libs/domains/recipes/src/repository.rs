use async_trait::async_trait;

use crate::error::RecipeResult;
use crate::models::{NewRecipe, Recipe};

/// Repository trait for Recipe persistence
///
/// Implementations perform exactly one store operation per call and never
/// retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Store a new recipe and return its assigned id
    async fn create(&self, input: NewRecipe) -> RecipeResult<String>;

    /// All stored recipes, in no particular order
    async fn list(&self) -> RecipeResult<Vec<Recipe>>;

    /// `Ok(None)` when no recipe has this id, `InvalidId` when `id` is not a
    /// well-formed identifier
    async fn get_by_id(&self, id: &str) -> RecipeResult<Option<Recipe>>;
}
