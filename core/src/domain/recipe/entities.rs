use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A full recipe record as served to clients. Records obtained from the
/// provider's filter endpoints lack most of these fields until the
/// fill-in lookup completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Option<String>,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
    pub source_url: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub name: String,
    pub measure: String,
}

/// Partial record returned by the provider's filter endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: Option<String>,
    pub name: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MealCourse {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealCourse {
    /// Course labels for the surprise-me menu, in serving order.
    pub const MENU: [MealCourse; 3] = [MealCourse::Breakfast, MealCourse::Lunch, MealCourse::Dinner];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CoursedRecipe {
    pub course: MealCourse,
    pub recipe: Recipe,
}
