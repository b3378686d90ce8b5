//! Recipes Domain
//!
//! Recipes stored in MongoDB and the HTTP endpoints that list, create and
//! fetch them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, error-to-status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Required-field validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, payload DTO
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_recipes::{handlers, MongoRecipeRepository, RecipeService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("cookbook");
//!
//! let service = RecipeService::new(MongoRecipeRepository::new(&db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{RECIPE_NOT_FOUND, RecipeError, RecipeResult};
pub use handlers::ApiDoc;
pub use models::{CreateRecipe, NewRecipe, Recipe};
pub use mongodb::{MongoRecipeRepository, RECIPES_COLLECTION};
pub use repository::RecipeRepository;
pub use service::RecipeService;
