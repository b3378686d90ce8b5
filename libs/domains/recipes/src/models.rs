use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Recipe entity as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    /// Store-assigned identifier (24 hex digits)
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub title: String,
    /// Ingredients in the order they were submitted
    pub ingredients: Vec<String>,
    pub instructions: String,
    /// Opaque image reference, never fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Body of `POST /recipes`
///
/// Every field is optional at the wire level so that a missing field is a
/// validation failure (400) rather than a body parse failure. Any `id` or
/// `_id` the client sends is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipe {
    #[validate(required, length(min = 1))]
    #[schema(example = "Soup")]
    pub title: Option<String>,

    /// May be empty, but must be present. Forms may repeat the key or use
    /// `ingredients[]`.
    #[serde(default, alias = "ingredients[]")]
    #[validate(required)]
    pub ingredients: Option<Vec<String>>,

    #[validate(required, length(min = 1))]
    #[schema(example = "Boil")]
    pub instructions: Option<String>,

    pub image: Option<String>,
}

/// Validated recipe fields ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: Option<String>,
}

impl TryFrom<CreateRecipe> for NewRecipe {
    type Error = ValidationErrors;

    fn try_from(input: CreateRecipe) -> Result<Self, Self::Error> {
        input.validate()?;
        Ok(Self {
            title: input.title.unwrap_or_default(),
            ingredients: input.ingredients.unwrap_or_default(),
            instructions: input.instructions.unwrap_or_default(),
            image: input.image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soup() -> CreateRecipe {
        CreateRecipe {
            title: Some("Soup".to_string()),
            ingredients: Some(vec!["water".to_string(), "salt".to_string()]),
            instructions: Some("Boil".to_string()),
            image: None,
        }
    }

    #[test]
    fn test_complete_payload_converts() {
        let recipe = NewRecipe::try_from(soup()).unwrap();
        assert_eq!(recipe.title, "Soup");
        assert_eq!(recipe.ingredients, vec!["water", "salt"]);
        assert_eq!(recipe.instructions, "Boil");
        assert_eq!(recipe.image, None);
    }

    #[test]
    fn test_empty_ingredient_list_is_allowed() {
        let input = CreateRecipe {
            ingredients: Some(vec![]),
            ..soup()
        };
        assert!(NewRecipe::try_from(input).is_ok());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let errors = NewRecipe::try_from(CreateRecipe::default()).unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("ingredients"));
        assert!(fields.contains_key("instructions"));
        assert!(!fields.contains_key("image"));
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let input = CreateRecipe {
            title: Some(String::new()),
            ..soup()
        };
        let errors = NewRecipe::try_from(input).unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_client_supplied_id_is_ignored() {
        let input: CreateRecipe = serde_json::from_value(serde_json::json!({
            "_id": "0123456789abcdef01234567",
            "id": "mine",
            "title": "Soup",
            "ingredients": ["water"],
            "instructions": "Boil"
        }))
        .unwrap();
        assert!(NewRecipe::try_from(input).is_ok());
    }

    #[test]
    fn test_recipe_without_image_omits_field() {
        let recipe = Recipe {
            id: "0123456789abcdef01234567".to_string(),
            title: "Soup".to_string(),
            ingredients: vec![],
            instructions: "Boil".to_string(),
            image: None,
        };
        let json = serde_json::to_value(&recipe).unwrap();
        assert!(json.get("image").is_none());
        assert_eq!(json["id"], "0123456789abcdef01234567");
    }
}
