use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealdex_core::domain::recipe::{entities::CoursedRecipe, ports::RecipeService};

#[derive(Debug, Serialize, ToSchema)]
pub struct RandomMenuResponse {
    pub data: Vec<CoursedRecipe>,
}

#[utoipa::path(
    get,
    path = "/random-menu",
    tag = "recipes",
    summary = "Surprise-me menu",
    description = "Three random recipes labelled breakfast, lunch and dinner",
    responses(
        (status = 200, body = RandomMenuResponse)
    ),
)]
pub async fn random_menu(
    State(state): State<AppState>,
) -> Result<Response<RandomMenuResponse>, ApiError> {
    let data = state.service.random_menu().await.map_err(ApiError::from)?;

    Ok(Response::OK(RandomMenuResponse { data }))
}
