use std::collections::HashMap;

use crate::domain::recipe::entities::{Recipe, RecipeIngredient, RecipeSummary};
use crate::infrastructure::recipe_db::client::MealRecord;

/// Number of positional ingredient/measure field pairs in a provider record.
const POSITIONAL_PAIRS: usize = 20;

pub(crate) fn recipe_from_record(record: MealRecord) -> Recipe {
    let ingredients = extract_ingredients(&record.positional);

    Recipe {
        id: record.id_meal,
        name: record.str_meal,
        thumbnail: record.str_meal_thumb,
        category: record.str_category,
        area: record.str_area,
        instructions: record.str_instructions,
        ingredients,
        source_url: record.str_source,
        video_url: record.str_youtube,
    }
}

pub(crate) fn summary_from_record(record: MealRecord) -> RecipeSummary {
    RecipeSummary {
        id: record.id_meal,
        name: record.str_meal,
        thumbnail: record.str_meal_thumb,
    }
}

/// Walk `strIngredient1..20`/`strMeasure1..20` in order, keeping pairs
/// whose ingredient name is non-blank. Measures default to empty.
fn extract_ingredients(positional: &HashMap<String, Option<String>>) -> Vec<RecipeIngredient> {
    (1..=POSITIONAL_PAIRS)
        .filter_map(|index| {
            let name = positional
                .get(&format!("strIngredient{index}"))
                .and_then(|value| value.as_deref())?
                .trim();
            if name.is_empty() {
                return None;
            }

            let measure = positional
                .get(&format!("strMeasure{index}"))
                .and_then(|value| value.as_deref())
                .unwrap_or("")
                .trim()
                .to_string();

            Some(RecipeIngredient {
                name: name.to_string(),
                measure,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(positional: &[(&str, Option<&str>)]) -> MealRecord {
        MealRecord {
            id_meal: Some("52772".to_string()),
            str_meal: "Test Pasta".to_string(),
            str_meal_thumb: Some("http://img/pasta.jpg".to_string()),
            str_category: Some("Pasta".to_string()),
            str_area: Some("Italian".to_string()),
            str_instructions: Some("Boil water. Cook pasta.".to_string()),
            str_source: None,
            str_youtube: None,
            positional: positional
                .iter()
                .map(|(key, value)| (key.to_string(), value.map(str::to_string)))
                .collect(),
        }
    }

    #[test]
    fn keeps_named_pairs_in_positional_order() {
        let recipe = recipe_from_record(record(&[
            ("strIngredient1", Some("Pasta")),
            ("strMeasure1", Some("200g")),
            ("strIngredient2", Some("Salt")),
            ("strMeasure2", Some("1 tsp")),
        ]));

        assert_eq!(
            recipe.ingredients,
            vec![
                RecipeIngredient {
                    name: "Pasta".to_string(),
                    measure: "200g".to_string(),
                },
                RecipeIngredient {
                    name: "Salt".to_string(),
                    measure: "1 tsp".to_string(),
                },
            ]
        );
    }

    #[test]
    fn skips_blank_and_null_ingredient_slots() {
        let recipe = recipe_from_record(record(&[
            ("strIngredient1", Some("Chicken")),
            ("strMeasure1", Some("300g")),
            ("strIngredient2", Some("  ")),
            ("strMeasure2", Some("to taste")),
            ("strIngredient3", None),
            ("strMeasure3", None),
            ("strIngredient4", Some("")),
        ]));

        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "Chicken");
    }

    #[test]
    fn missing_measure_defaults_to_empty() {
        let recipe = recipe_from_record(record(&[("strIngredient1", Some("Paprika"))]));

        assert_eq!(recipe.ingredients[0].measure, "");
    }

    #[test]
    fn ingredient_names_and_measures_are_trimmed() {
        let recipe = recipe_from_record(record(&[
            ("strIngredient1", Some(" Olive Oil ")),
            ("strMeasure1", Some(" 2 tbsp ")),
        ]));

        assert_eq!(recipe.ingredients[0].name, "Olive Oil");
        assert_eq!(recipe.ingredients[0].measure, "2 tbsp");
    }

    #[test]
    fn slots_past_twenty_are_ignored() {
        let recipe = recipe_from_record(record(&[
            ("strIngredient1", Some("Flour")),
            ("strIngredient21", Some("Phantom")),
        ]));

        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "Flour");
    }

    #[test]
    fn summary_keeps_only_identity_fields() {
        let summary = summary_from_record(record(&[]));

        assert_eq!(summary.name, "Test Pasta");
        assert_eq!(summary.id.as_deref(), Some("52772"));
        assert_eq!(summary.thumbnail.as_deref(), Some("http://img/pasta.jpg"));
    }
}
