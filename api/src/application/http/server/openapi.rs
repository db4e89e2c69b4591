use utoipa::OpenApi;

use crate::application::http::nutrition::router::NutritionApiDoc;
use crate::application::http::recipe::router::RecipeApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mealdex API",
        description = "Recipe search and nutrition gateway over external recipe and nutrition providers"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/nutrition", api = NutritionApiDoc),
    ),
    tags(
        (name = "recipes", description = "Recipe search, lookup and random menus"),
        (name = "nutrition", description = "Nutrition aggregation and image scanning"),
        (name = "health", description = "Liveness and readiness"),
    )
)]
pub struct ApiDoc;
