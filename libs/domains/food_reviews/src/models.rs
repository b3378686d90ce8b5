use domain_recipes::NewRecipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Food review as returned by the API
///
/// A review is a proposed recipe: same fields, separate collection, and no
/// link to any recipe created from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodReview {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f7")]
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Body of `POST /food-reviews`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFoodReview {
    #[validate(required, length(min = 1))]
    #[schema(example = "Grandma's stew")]
    pub title: Option<String>,

    #[serde(default, alias = "ingredients[]")]
    #[validate(required)]
    pub ingredients: Option<Vec<String>>,

    #[validate(required, length(min = 1))]
    #[schema(example = "Simmer for three hours")]
    pub instructions: Option<String>,

    pub image: Option<String>,
}

/// Validated review fields ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFoodReview {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: Option<String>,
}

impl TryFrom<CreateFoodReview> for NewFoodReview {
    type Error = ValidationErrors;

    fn try_from(input: CreateFoodReview) -> Result<Self, Self::Error> {
        input.validate()?;
        Ok(Self {
            title: input.title.unwrap_or_default(),
            ingredients: input.ingredients.unwrap_or_default(),
            instructions: input.instructions.unwrap_or_default(),
            image: input.image,
        })
    }
}

/// Copies a review's fields into a new recipe. The review id is not carried.
impl From<FoodReview> for NewRecipe {
    fn from(review: FoodReview) -> Self {
        Self {
            title: review.title,
            ingredients: review.ingredients,
            instructions: review.instructions,
            image: review.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_converts_to_recipe_fields() {
        let review = FoodReview {
            id: "65a1f0c2e4b0a1b2c3d4e5f7".to_string(),
            title: "Stew".to_string(),
            ingredients: vec!["beef".to_string()],
            instructions: "Simmer".to_string(),
            image: Some("stew.png".to_string()),
        };

        let recipe = NewRecipe::from(review);
        assert_eq!(
            recipe,
            NewRecipe {
                title: "Stew".to_string(),
                ingredients: vec!["beef".to_string()],
                instructions: "Simmer".to_string(),
                image: Some("stew.png".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_ingredients_rejected() {
        let input = CreateFoodReview {
            title: Some("Stew".to_string()),
            ingredients: None,
            instructions: Some("Simmer".to_string()),
            image: None,
        };
        let errors = NewFoodReview::try_from(input).unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
        assert!(errors.field_errors().contains_key("ingredients"));
    }

    #[test]
    fn test_form_style_bracket_key_is_accepted() {
        let input: CreateFoodReview = serde_json::from_value(serde_json::json!({
            "title": "Stew",
            "ingredients[]": ["beef"],
            "instructions": "Simmer"
        }))
        .unwrap();
        assert_eq!(input.ingredients, Some(vec!["beef".to_string()]));
    }
}
