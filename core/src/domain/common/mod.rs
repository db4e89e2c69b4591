use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct MealdexConfig {
    pub recipe_db: RecipeDbConfig,
    pub nutrition: NutritionApiConfig,
}

/// Recipe database provider (TheMealDB-compatible JSON API).
#[derive(Clone, Debug)]
pub struct RecipeDbConfig {
    pub base_url: String,
}

/// Nutrition provider (API Ninjas-compatible nutrition and image-to-text API).
#[derive(Clone, Debug)]
pub struct NutritionApiConfig {
    pub base_url: String,
    pub api_key: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
