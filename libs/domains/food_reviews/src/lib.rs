//! Food Reviews Domain
//!
//! Food reviews are proposed recipes. They can be listed, submitted, fetched
//! and accepted; accepting copies the review into the recipe collection.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_food_reviews::{handlers, FoodReviewService, MongoFoodReviewRepository};
//! use domain_recipes::MongoRecipeRepository;
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("cookbook");
//!
//! let service = FoodReviewService::new(
//!     MongoFoodReviewRepository::new(&db),
//!     MongoRecipeRepository::new(&db),
//! );
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
pub use error::{FOOD_REVIEW_NOT_FOUND, FoodReviewError, FoodReviewResult};
pub use handlers::ApiDoc;
pub use models::{CreateFoodReview, FoodReview, NewFoodReview};
pub use mongodb::{FOOD_REVIEWS_COLLECTION, MongoFoodReviewRepository};
pub use repository::FoodReviewRepository;
pub use service::FoodReviewService;
