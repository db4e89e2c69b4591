use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{
        entities::{NutritionFacts, NutritionReport, ScanReport},
        value_objects::{RecipeNutritionInput, ScanImageInput},
    },
};

/// Outbound port to the nutrition provider.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionProviderPort: Send + Sync {
    /// Nutrition fact rows for a free-text food query. Unrecognized
    /// queries yield an empty list, not an error.
    fn nutrition(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<NutritionFacts>, CoreError>> + Send;

    /// OCR text blocks recovered from an uploaded image, in reading order.
    fn image_to_text(
        &self,
        image: Bytes,
        content_type: String,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

/// Service trait for nutrition aggregation and image scanning.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn recipe_nutrition(
        &self,
        input: RecipeNutritionInput,
    ) -> impl Future<Output = Result<NutritionReport, CoreError>> + Send;

    fn scan_image(
        &self,
        input: ScanImageInput,
    ) -> impl Future<Output = Result<ScanReport, CoreError>> + Send;
}
