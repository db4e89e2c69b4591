use crate::domain::nutrition::entities::NutritionFacts;
use crate::infrastructure::nutrition_api::client::NutritionRow;

pub(crate) fn facts_from_row(row: NutritionRow) -> NutritionFacts {
    NutritionFacts {
        name: row.name,
        fat_total_g: row.fat_total_g,
        fat_saturated_g: row.fat_saturated_g,
        sodium_mg: row.sodium_mg,
        potassium_mg: row.potassium_mg,
        cholesterol_mg: row.cholesterol_mg,
        carbohydrates_total_g: row.carbohydrates_total_g,
        fiber_g: row.fiber_g,
        sugar_g: row.sugar_g,
    }
}
