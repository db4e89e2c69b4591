use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{
    common::{RecipeDbConfig, entities::app_errors::CoreError},
    recipe::{
        entities::{Recipe, RecipeSummary},
        ports::RecipeDatabasePort,
        value_objects::FilterKind,
    },
};
use crate::infrastructure::recipe_db::mappers::{recipe_from_record, summary_from_record};

/// Client for a TheMealDB-compatible recipe database API.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    meals: Option<Vec<MealRecord>>,
}

/// Raw provider record. Ingredients and measures arrive as twenty
/// positional string fields (`strIngredient1..20`, `strMeasure1..20`),
/// captured through the flattened map.
#[derive(Debug, Deserialize)]
pub(crate) struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id_meal: Option<String>,
    #[serde(rename = "strMeal")]
    pub str_meal: String,
    #[serde(rename = "strMealThumb")]
    pub str_meal_thumb: Option<String>,
    #[serde(rename = "strCategory")]
    pub str_category: Option<String>,
    #[serde(rename = "strArea")]
    pub str_area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub str_instructions: Option<String>,
    #[serde(rename = "strSource")]
    pub str_source: Option<String>,
    #[serde(rename = "strYoutube")]
    pub str_youtube: Option<String>,
    #[serde(flatten)]
    pub positional: HashMap<String, Option<String>>,
}

#[derive(Debug, Deserialize)]
struct CategoryListEnvelope {
    meals: Option<Vec<CategoryName>>,
}

#[derive(Debug, Deserialize)]
struct CategoryName {
    #[serde(rename = "strCategory")]
    str_category: String,
}

impl MealDbClient {
    pub fn new(config: RecipeDbConfig) -> Result<Self, CoreError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            CoreError::InvalidInput(format!("invalid recipe database base url: {e}"))
        })?;

        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, CoreError> {
        Url::parse_with_params(&format!("{}/{path}", self.base_url), params).map_err(|e| {
            tracing::error!("failed to build recipe database url: {e}");
            CoreError::InternalServerError
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, CoreError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("recipe database request failed: {e}");
            CoreError::ExternalServiceError(format!("recipe database error: {e}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("recipe database error: {status} - {error_text}");
            return Err(CoreError::ExternalServiceError(format!(
                "recipe database returned error: {status}"
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("failed to parse recipe database response: {e}");
            CoreError::ExternalServiceError(format!(
                "failed to parse recipe database response: {e}"
            ))
        })
    }

    async fn fetch_meals(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<MealRecord>, CoreError> {
        let url = self.endpoint(path, params)?;
        let envelope: MealsEnvelope = self.get_json(url).await?;
        // `meals: null` is the provider's "no matches" answer.
        Ok(envelope.meals.unwrap_or_default())
    }
}

impl RecipeDatabasePort for MealDbClient {
    async fn search_by_name(&self, name: String) -> Result<Vec<Recipe>, CoreError> {
        let records = self.fetch_meals("search.php", &[("s", name.as_str())]).await?;
        Ok(records.into_iter().map(recipe_from_record).collect())
    }

    async fn filter(&self, kind: FilterKind, term: String) -> Result<Vec<RecipeSummary>, CoreError> {
        let param = match kind {
            FilterKind::Ingredient => "i",
            FilterKind::Area => "a",
            FilterKind::Category => "c",
        };
        let records = self
            .fetch_meals("filter.php", &[(param, term.as_str())])
            .await?;
        Ok(records.into_iter().map(summary_from_record).collect())
    }

    async fn lookup_by_id(&self, recipe_id: String) -> Result<Option<Recipe>, CoreError> {
        let records = self
            .fetch_meals("lookup.php", &[("i", recipe_id.as_str())])
            .await?;
        Ok(records.into_iter().next().map(recipe_from_record))
    }

    async fn random(&self) -> Result<Recipe, CoreError> {
        let records = self.fetch_meals("random.php", &[]).await?;
        records
            .into_iter()
            .next()
            .map(recipe_from_record)
            .ok_or_else(|| {
                CoreError::ExternalServiceError(
                    "recipe database returned no random recipe".to_string(),
                )
            })
    }

    async fn list_categories(&self) -> Result<Vec<String>, CoreError> {
        let url = self.endpoint("list.php", &[("c", "list")])?;
        let envelope: CategoryListEnvelope = self.get_json(url).await?;
        Ok(envelope
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(|category| category.str_category)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_meals_means_no_matches() {
        let envelope: MealsEnvelope = serde_json::from_str(r#"{"meals":null}"#).unwrap();
        assert!(envelope.meals.is_none());
    }

    #[test]
    fn positional_fields_land_in_the_flattened_map() {
        let envelope: MealsEnvelope = serde_json::from_value(serde_json::json!({
            "meals": [{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strCategory": "Chicken",
                "strArea": "Japanese",
                "strInstructions": "Preheat oven to 350.",
                "strMealThumb": "http://img/teriyaki.jpg",
                "strSource": null,
                "strYoutube": "",
                "strIngredient1": "soy sauce",
                "strMeasure1": "3/4 cup",
                "strIngredient2": "",
                "strMeasure2": null,
                "dateModified": null
            }]
        }))
        .unwrap();

        let record = envelope.meals.unwrap().remove(0);
        assert_eq!(record.id_meal.as_deref(), Some("52772"));
        assert_eq!(
            record
                .positional
                .get("strIngredient1")
                .and_then(|value| value.as_deref()),
            Some("soy sauce")
        );
        assert_eq!(
            record.positional.get("strMeasure2"),
            Some(&None::<String>)
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let client = MealDbClient::new(RecipeDbConfig {
            base_url: "https://example.test/api/json/v1/1/".to_string(),
        })
        .unwrap();

        let url = client.endpoint("search.php", &[("s", "pasta")]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.test/api/json/v1/1/search.php?s=pasta"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = MealDbClient::new(RecipeDbConfig {
            base_url: "not a url".to_string(),
        })
        .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
