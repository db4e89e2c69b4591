use clap::Parser;
use mealdex_core::domain::common::{MealdexConfig, NutritionApiConfig, RecipeDbConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealdex-api", about = "Recipe search and nutrition gateway")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub recipe_db: RecipeDbArgs,

    #[command(flatten)]
    pub nutrition: NutritionArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "MEALDEX_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "MEALDEX_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Prefix for every route, including docs and metrics.
    #[arg(long, env = "MEALDEX_ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    /// Origins allowed by CORS, comma-separated.
    #[arg(
        long = "allowed-origin",
        env = "MEALDEX_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RecipeDbArgs {
    #[arg(
        long = "recipe-db-url",
        env = "MEALDEX_RECIPE_DB_URL",
        default_value = "https://www.themealdb.com/api/json/v1/1"
    )]
    pub recipe_db_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct NutritionArgs {
    #[arg(
        long = "nutrition-url",
        env = "MEALDEX_NUTRITION_URL",
        default_value = "https://api.api-ninjas.com/v1"
    )]
    pub nutrition_url: String,

    #[arg(long = "nutrition-api-key", env = "MEALDEX_NUTRITION_API_KEY")]
    pub nutrition_api_key: String,
}

impl From<Args> for MealdexConfig {
    fn from(args: Args) -> Self {
        MealdexConfig {
            recipe_db: RecipeDbConfig {
                base_url: args.recipe_db.recipe_db_url,
            },
            nutrition: NutritionApiConfig {
                base_url: args.nutrition.nutrition_url,
                api_key: args.nutrition.nutrition_api_key,
            },
        }
    }
}
