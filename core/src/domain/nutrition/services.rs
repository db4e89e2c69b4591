use futures::future::try_join_all;
use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    nutrition::{
        entities::{NutritionReport, ScanReport},
        helpers::{aggregate_facts, ingredient_query},
        ports::{NutritionProviderPort, NutritionService},
        value_objects::{
            ACCEPTED_IMAGE_TYPES, MAX_SCAN_IMAGE_BYTES, RecipeNutritionInput, ScanImageInput,
        },
    },
    recipe::ports::RecipeDatabasePort,
};

impl<R, N> NutritionService for Service<R, N>
where
    R: RecipeDatabasePort,
    N: NutritionProviderPort,
{
    async fn recipe_nutrition(
        &self,
        input: RecipeNutritionInput,
    ) -> Result<NutritionReport, CoreError> {
        let queries: Vec<String> = input
            .ingredients
            .iter()
            .map(ingredient_query)
            .filter(|query| !query.is_empty())
            .collect();

        if queries.is_empty() {
            return Err(CoreError::InvalidInput(
                "ingredient list must contain at least one named ingredient".to_string(),
            ));
        }

        debug!(ingredients = queries.len(), "aggregating recipe nutrition");

        let lookups = queries
            .into_iter()
            .map(|query| self.nutrition_provider.nutrition(query));
        let rows = try_join_all(lookups).await?;

        let items: Vec<_> = rows.into_iter().flatten().collect();
        let totals = aggregate_facts(&items);
        Ok(NutritionReport { items, totals })
    }

    async fn scan_image(&self, input: ScanImageInput) -> Result<ScanReport, CoreError> {
        if !ACCEPTED_IMAGE_TYPES.contains(&input.content_type.as_str()) {
            return Err(CoreError::UnsupportedImageType(input.content_type));
        }
        if input.image.is_empty() {
            return Err(CoreError::InvalidInput("image is empty".to_string()));
        }
        if input.image.len() > MAX_SCAN_IMAGE_BYTES {
            return Err(CoreError::ImageTooLarge {
                size: input.image.len(),
                limit: MAX_SCAN_IMAGE_BYTES,
            });
        }

        let id = generate_uuid_v7();
        debug!(scan = %id, bytes = input.image.len(), "scanning image for nutrition");

        let blocks = self
            .nutrition_provider
            .image_to_text(input.image, input.content_type)
            .await?;
        let text = blocks.join(" ").trim().to_string();
        if text.is_empty() {
            return Err(CoreError::NoTextDetected);
        }

        let items = self.nutrition_provider.nutrition(text.clone()).await?;
        let totals = aggregate_facts(&items);
        Ok(ScanReport {
            id,
            text,
            items,
            totals,
        })
    }
}
