use chrono::{DateTime, Utc};

use crate::domain::{nutrition::ports::NutritionProviderPort, recipe::ports::RecipeDatabasePort};

/// Aggregate service over the two upstream ports. Domain service traits
/// (`RecipeService`, `NutritionService`, `HealthCheckService`) are all
/// implemented on this one type.
#[derive(Debug, Clone)]
pub struct Service<R, N>
where
    R: RecipeDatabasePort,
    N: NutritionProviderPort,
{
    pub(crate) recipe_db: R,
    pub(crate) nutrition_provider: N,
    pub(crate) started_at: DateTime<Utc>,
}

impl<R, N> Service<R, N>
where
    R: RecipeDatabasePort,
    N: NutritionProviderPort,
{
    pub fn new(recipe_db: R, nutrition_provider: N) -> Self {
        Self {
            recipe_db,
            nutrition_provider,
            started_at: Utc::now(),
        }
    }
}
