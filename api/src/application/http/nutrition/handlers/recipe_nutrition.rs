use axum::Json;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    nutrition::validators::RecipeNutritionRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use mealdex_core::domain::nutrition::{
    entities::NutritionReport, ports::NutritionService, value_objects::RecipeNutritionInput,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeNutritionResponse {
    pub data: NutritionReport,
}

#[utoipa::path(
    post,
    path = "/recipe",
    tag = "nutrition",
    summary = "Aggregate recipe nutrition",
    description = "Look up nutrition facts for each ingredient and sum them into recipe-level totals",
    request_body = RecipeNutritionRequest,
    responses(
        (status = 200, body = RecipeNutritionResponse)
    ),
)]
pub async fn recipe_nutrition(
    State(state): State<AppState>,
    Json(request): Json<RecipeNutritionRequest>,
) -> Result<Response<RecipeNutritionResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let ingredients = request.ingredients.into_iter().map(Into::into).collect();

    let data = state
        .service
        .recipe_nutrition(RecipeNutritionInput { ingredients })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeNutritionResponse { data }))
}
