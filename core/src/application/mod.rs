use crate::domain::common::{MealdexConfig, entities::app_errors::CoreError, services::Service};
use crate::infrastructure::{nutrition_api::ApiNinjasClient, recipe_db::MealDbClient};

pub type MealdexService = Service<MealDbClient, ApiNinjasClient>;

/// Build the service wired to the two upstream providers.
pub async fn create_service(config: MealdexConfig) -> Result<MealdexService, CoreError> {
    let recipe_db = MealDbClient::new(config.recipe_db)?;
    let nutrition_provider = ApiNinjasClient::new(config.nutrition)?;

    Ok(Service::new(recipe_db, nutrition_provider))
}
