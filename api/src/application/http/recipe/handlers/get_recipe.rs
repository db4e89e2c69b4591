use axum::extract::{Path, State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealdex_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GetRecipeInput,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipes",
    summary = "Get recipe by id",
    description = "Fetch one full recipe record from the recipe database",
    responses(
        (status = 200, body = RecipeResponse),
        (status = 404, description = "Unknown recipe id")
    ),
    params(
        ("recipe_id" = String, Path, description = "Recipe database id"),
    ),
)]
pub async fn get_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let data = state
        .service
        .get_recipe(GetRecipeInput { recipe_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeResponse { data }))
}
