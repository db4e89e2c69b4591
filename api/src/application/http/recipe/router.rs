use axum::{
    Router,
    routing::get,
};
use utoipa::OpenApi;

use super::handlers::{
    get_recipe::{__path_get_recipe, get_recipe},
    random_menu::{__path_random_menu, random_menu},
    search_recipes::{__path_search_recipes, search_recipes},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(search_recipes, random_menu, get_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/search", state.args.server.root_path),
            get(search_recipes),
        )
        .route(
            &format!("{}/recipes/random-menu", state.args.server.root_path),
            get(random_menu),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", state.args.server.root_path),
            get(get_recipe),
        )
}
