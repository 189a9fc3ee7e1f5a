use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// One `emoji | name` line of a model reply, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealSuggestion {
    pub image: String,
    pub name: String,
}

impl MealSuggestion {
    pub fn new(image: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealRecommendation {
    pub id: Uuid,
    /// Intended to be a single emoji; whatever preceded the separator.
    #[schema(example = "🍜")]
    pub image: String,
    #[schema(example = "Spaghetti Carbonara")]
    pub name: String,
}

impl MealRecommendation {
    pub fn new(suggestion: MealSuggestion) -> Self {
        Self {
            id: generate_uuid_v7(),
            image: suggestion.image,
            name: suggestion.name,
        }
    }
}
