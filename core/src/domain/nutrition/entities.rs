use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One nutrition fact row as returned by the provider for a single
/// recognized food item. The provider's own calorie field is premium-only
/// and deliberately absent; see [`NutritionTotals::estimated_calories`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionFacts {
    pub name: String,
    pub fat_total_g: f64,
    pub fat_saturated_g: f64,
    pub sodium_mg: f64,
    pub potassium_mg: f64,
    pub cholesterol_mg: f64,
    pub carbohydrates_total_g: f64,
    pub fiber_g: f64,
    pub sugar_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionTotals {
    pub fat_total_g: f64,
    pub fat_saturated_g: f64,
    pub sodium_mg: f64,
    pub potassium_mg: f64,
    pub cholesterol_mg: f64,
    pub carbohydrates_total_g: f64,
    pub fiber_g: f64,
    pub sugar_g: f64,
    /// Fiber-adjusted Atwater estimate, rounded to the nearest calorie.
    pub estimated_calories: f64,
}

/// Per-ingredient nutrition rows for a recipe, with recipe-level totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionReport {
    pub items: Vec<NutritionFacts>,
    pub totals: NutritionTotals,
}

/// Result of the image-to-nutrition pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanReport {
    pub id: Uuid,
    /// Text recovered from the uploaded image, as submitted to the
    /// nutrition lookup.
    pub text: String,
    pub items: Vec<NutritionFacts>,
    pub totals: NutritionTotals,
}
