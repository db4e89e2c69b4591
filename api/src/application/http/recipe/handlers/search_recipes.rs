use axum::extract::{Query, State};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    recipe::validators::SearchRecipesQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use mealdex_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::SearchRecipesInput,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "recipes",
    summary = "Search recipes",
    description = "Search recipes by name, main ingredient, area or category. Filter matches are completed with a second lookup per result.",
    params(SearchRecipesQuery),
    responses(
        (status = 200, body = SearchRecipesResponse)
    ),
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(query): Query<SearchRecipesQuery>,
) -> Result<Response<SearchRecipesResponse>, ApiError> {
    query
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let data = state
        .service
        .search_recipes(SearchRecipesInput {
            kind: query.by.into(),
            query: query.q,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchRecipesResponse { data }))
}
