use axum::extract::{Multipart, State};
use bytes::Bytes;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealdex_core::domain::nutrition::{
    entities::ScanReport, ports::NutritionService, value_objects::ScanImageInput,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ScanImageResponse {
    pub data: ScanReport,
}

#[utoipa::path(
    post,
    path = "/scan",
    tag = "nutrition",
    summary = "Scan an image for nutrition facts",
    description = "Extract text from an uploaded menu or label image and look up nutrition facts for it",
    responses(
        (status = 200, body = ScanImageResponse),
        (status = 400, description = "Missing, oversized or non-image upload")
    ),
)]
pub async fn scan_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ScanImageResponse>, ApiError> {
    let mut image: Option<(Bytes, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name.as_str() == "image" {
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

            image = Some((data, content_type));
        }
    }

    let (image, content_type) =
        image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let data = state
        .service
        .scan_image(ScanImageInput {
            image,
            content_type,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScanImageResponse { data }))
}
