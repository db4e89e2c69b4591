use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use mealdex_core::domain::recipe::entities::RecipeIngredient;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecipeNutritionRequest {
    /// The provider's recipe format carries at most 20 ingredients; the
    /// cap is doubled to leave room for hand-assembled lists.
    #[validate(length(min = 1, max = 40, message = "ingredients must be 1-40 entries"))]
    pub ingredients: Vec<IngredientEntry>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct IngredientEntry {
    pub name: String,
    #[serde(default)]
    pub measure: String,
}

impl From<IngredientEntry> for RecipeIngredient {
    fn from(entry: IngredientEntry) -> Self {
        RecipeIngredient {
            name: entry.name,
            measure: entry.measure,
        }
    }
}
