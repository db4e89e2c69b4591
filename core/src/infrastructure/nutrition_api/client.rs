use bytes::Bytes;
use reqwest::{Client, multipart};
use serde::Deserialize;
use url::Url;

use crate::domain::{
    common::{NutritionApiConfig, entities::app_errors::CoreError},
    nutrition::{entities::NutritionFacts, ports::NutritionProviderPort},
};
use crate::infrastructure::nutrition_api::mappers::facts_from_row;

const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for an API Ninjas-compatible nutrition provider, covering the
/// nutrition lookup and image-to-text endpoints.
#[derive(Debug, Clone)]
pub struct ApiNinjasClient {
    base_url: String,
    api_key: String,
    client: Client,
}

/// Raw nutrition row. The provider omits premium-only fields (calories,
/// protein, serving size) on the free tier; only the fields the service
/// consumes are declared. Rows occasionally arrive without a name.
#[derive(Debug, Deserialize)]
pub(crate) struct NutritionRow {
    #[serde(default)]
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

#[derive(Debug, Deserialize)]
struct TextBlock {
    text: String,
}

impl ApiNinjasClient {
    pub fn new(config: NutritionApiConfig) -> Result<Self, CoreError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            CoreError::InvalidInput(format!("invalid nutrition provider base url: {e}"))
        })?;

        Ok(Self {
            base_url,
            api_key: config.api_key,
            client: Client::new(),
        })
    }

    async fn read_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, CoreError> {
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("nutrition provider error: {status} - {error_text}");
            return Err(CoreError::ExternalServiceError(format!(
                "nutrition provider returned error: {status}"
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("failed to parse nutrition provider response: {e}");
            CoreError::ExternalServiceError(format!(
                "failed to parse nutrition provider response: {e}"
            ))
        })
    }
}

impl NutritionProviderPort for ApiNinjasClient {
    async fn nutrition(&self, query: String) -> Result<Vec<NutritionFacts>, CoreError> {
        let url = Url::parse_with_params(
            &format!("{}/nutrition", self.base_url),
            &[("query", query.as_str())],
        )
        .map_err(|e| {
            tracing::error!("failed to build nutrition url: {e}");
            CoreError::InternalServerError
        })?;

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("nutrition request failed: {e}");
                CoreError::ExternalServiceError(format!("nutrition provider error: {e}"))
            })?;

        let rows: Vec<NutritionRow> = self.read_response(response).await?;
        Ok(rows.into_iter().map(facts_from_row).collect())
    }

    async fn image_to_text(
        &self,
        image: Bytes,
        content_type: String,
    ) -> Result<Vec<String>, CoreError> {
        let part = multipart::Part::bytes(image.to_vec())
            .file_name("image")
            .mime_str(&content_type)
            .map_err(|_| CoreError::UnsupportedImageType(content_type))?;
        let form = multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(format!("{}/imagetotext", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("image-to-text request failed: {e}");
                CoreError::ExternalServiceError(format!("nutrition provider error: {e}"))
            })?;

        let blocks: Vec<TextBlock> = self.read_response(response).await?;
        Ok(blocks.into_iter().map(|block| block.text).collect())
    }
}
