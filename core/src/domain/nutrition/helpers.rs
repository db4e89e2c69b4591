use crate::domain::{
    nutrition::entities::{NutritionFacts, NutritionTotals},
    recipe::entities::RecipeIngredient,
};

/// Query text for one recipe ingredient, e.g. "100g Pasta".
pub fn ingredient_query(ingredient: &RecipeIngredient) -> String {
    format!("{} {}", ingredient.measure.trim(), ingredient.name.trim())
        .trim()
        .to_string()
}

/// Calorie estimate from the macros the provider exposes on its free
/// tier: 9 kcal/g fat, 4 kcal/g non-fiber carbohydrate, 2 kcal/g fiber.
pub fn estimate_calories(fat_total_g: f64, carbohydrates_total_g: f64, fiber_g: f64) -> f64 {
    let non_fiber_carbs = carbohydrates_total_g - fiber_g;
    (9.0 * fat_total_g + 4.0 * non_fiber_carbs + 2.0 * fiber_g).round()
}

/// Sum fact rows into recipe-level totals.
pub fn aggregate_facts(items: &[NutritionFacts]) -> NutritionTotals {
    let mut totals = NutritionTotals {
        fat_total_g: 0.0,
        fat_saturated_g: 0.0,
        sodium_mg: 0.0,
        potassium_mg: 0.0,
        cholesterol_mg: 0.0,
        carbohydrates_total_g: 0.0,
        fiber_g: 0.0,
        sugar_g: 0.0,
        estimated_calories: 0.0,
    };

    for item in items {
        totals.fat_total_g += item.fat_total_g;
        totals.fat_saturated_g += item.fat_saturated_g;
        totals.sodium_mg += item.sodium_mg;
        totals.potassium_mg += item.potassium_mg;
        totals.cholesterol_mg += item.cholesterol_mg;
        totals.carbohydrates_total_g += item.carbohydrates_total_g;
        totals.fiber_g += item.fiber_g;
        totals.sugar_g += item.sugar_g;
    }

    totals.estimated_calories = estimate_calories(
        totals.fat_total_g,
        totals.carbohydrates_total_g,
        totals.fiber_g,
    );
    totals
}
