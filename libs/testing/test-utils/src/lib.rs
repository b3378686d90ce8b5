//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - `TestMongo`: MongoDB container with a private database (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `mongo` (default): Enables MongoDB test infrastructure
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestMongo, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let title = builder.title("soup");
//!     let payload = builder.payload("soup");
//! }
//! ```

use serde_json::{Value, json};

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic values
///
/// The same seed always yields the same titles and ingredient lists, so a
/// failing test can be reproduced exactly.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_recipe");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("recipe", "main"), "test-recipe-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Title unique to this builder's seed
    pub fn title(&self, suffix: &str) -> String {
        self.name("dish", suffix)
    }

    /// `count` ingredient names derived from the seed
    pub fn ingredients(&self, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("ingredient-{}-{}", self.seed % 1000, i))
            .collect()
    }

    pub fn instructions(&self, suffix: &str) -> String {
        format!("Combine everything for {}", self.title(suffix))
    }

    /// JSON body accepted by the create endpoints
    pub fn payload(&self, suffix: &str) -> Value {
        json!({
            "title": self.title(suffix),
            "ingredients": self.ingredients(3),
            "instructions": self.instructions(suffix),
        })
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `id` looks like a store-assigned ObjectId (24 lowercase hex digits)
    pub fn assert_object_id(id: &str, context: &str) {
        assert!(
            id.len() == 24 && id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')),
            "{}: expected a 24-digit hex id, got {:?}",
            context,
            id
        );
    }
}
