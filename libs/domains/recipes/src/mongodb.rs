//! MongoDB implementation of RecipeRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{RecipeError, RecipeResult};
use crate::models::{NewRecipe, Recipe};
use crate::repository::RecipeRepository;

/// Collection holding recipe documents
pub const RECIPES_COLLECTION: &str = "recipes";

/// Stored shape of a recipe
///
/// Unknown fields in existing documents (such as a version key) are ignored
/// on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecipeDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    ingredients: Vec<String>,
    instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl RecipeDocument {
    fn new(input: NewRecipe) -> Self {
        Self {
            id: ObjectId::new(),
            title: input.title,
            ingredients: input.ingredients,
            instructions: input.instructions,
            image: input.image,
        }
    }
}

impl From<RecipeDocument> for Recipe {
    fn from(doc: RecipeDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            title: doc.title,
            ingredients: doc.ingredients,
            instructions: doc.instructions,
            image: doc.image,
        }
    }
}

/// Parses an API id, rejecting anything that is not 24 hex digits
pub(crate) fn parse_id(id: &str) -> RecipeResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| RecipeError::InvalidId(id.to_string()))
}

/// MongoDB implementation of the RecipeRepository
pub struct MongoRecipeRepository {
    collection: Collection<RecipeDocument>,
}

impl MongoRecipeRepository {
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoRecipeRepository::new(&client.database("cookbook"));
    /// ```
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, RECIPES_COLLECTION)
    }

    /// Create a new MongoRecipeRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<RecipeDocument>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl RecipeRepository for MongoRecipeRepository {
    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create(&self, input: NewRecipe) -> RecipeResult<String> {
        let document = RecipeDocument::new(input);
        self.collection.insert_one(&document).await?;

        let id = document.id.to_hex();
        tracing::info!(recipe_id = %id, "Recipe created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RecipeResult<Vec<Recipe>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<RecipeDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Recipe::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> RecipeResult<Option<Recipe>> {
        let oid = parse_id(id)?;
        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(Recipe::from))
    }
}
