use axum::{
    Router,
    routing::post,
};
use utoipa::OpenApi;

use super::handlers::{
    recipe_nutrition::{__path_recipe_nutrition, recipe_nutrition},
    scan_image::{__path_scan_image, scan_image},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(recipe_nutrition, scan_image))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/nutrition/recipe", state.args.server.root_path),
            post(recipe_nutrition),
        )
        .route(
            &format!("{}/nutrition/scan", state.args.server.root_path),
            post(scan_image),
        )
}
