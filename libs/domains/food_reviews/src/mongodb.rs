//! MongoDB implementation of FoodReviewRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{FoodReviewError, FoodReviewResult};
use crate::models::{FoodReview, NewFoodReview};
use crate::repository::FoodReviewRepository;

/// Collection holding food review documents
pub const FOOD_REVIEWS_COLLECTION: &str = "foodreviews";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FoodReviewDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    ingredients: Vec<String>,
    instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl From<FoodReviewDocument> for FoodReview {
    fn from(doc: FoodReviewDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            title: doc.title,
            ingredients: doc.ingredients,
            instructions: doc.instructions,
            image: doc.image,
        }
    }
}

fn parse_id(id: &str) -> FoodReviewResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| FoodReviewError::InvalidId(id.to_string()))
}

/// MongoDB implementation of the FoodReviewRepository
pub struct MongoFoodReviewRepository {
    collection: Collection<FoodReviewDocument>,
}

impl MongoFoodReviewRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, FOOD_REVIEWS_COLLECTION)
    }

    /// Create a new MongoFoodReviewRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<FoodReviewDocument>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl FoodReviewRepository for MongoFoodReviewRepository {
    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create(&self, input: NewFoodReview) -> FoodReviewResult<String> {
        let document = FoodReviewDocument {
            id: ObjectId::new(),
            title: input.title,
            ingredients: input.ingredients,
            instructions: input.instructions,
            image: input.image,
        };
        self.collection.insert_one(&document).await?;

        let id = document.id.to_hex();
        tracing::info!(review_id = %id, "Food review created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> FoodReviewResult<Vec<FoodReview>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<FoodReviewDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(FoodReview::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> FoodReviewResult<Option<FoodReview>> {
        let oid = parse_id(id)?;
        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(FoodReview::from))
    }
}
