use std::time::Instant;

use chrono::Utc;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::{ReadinessStatus, UpstreamHealth},
        ports::HealthCheckService,
    },
    nutrition::ports::NutritionProviderPort,
    recipe::ports::RecipeDatabasePort,
};

impl<R, N> HealthCheckService for Service<R, N>
where
    R: RecipeDatabasePort,
    N: NutritionProviderPort,
{
    async fn health(&self) -> Result<u64, CoreError> {
        let uptime = Utc::now().signed_duration_since(self.started_at);
        Ok(uptime.num_seconds().max(0) as u64)
    }

    async fn readiness(&self) -> Result<ReadinessStatus, CoreError> {
        let probe_start = Instant::now();
        let recipe_db = match self.recipe_db.list_categories().await {
            Ok(_) => UpstreamHealth {
                reachable: true,
                latency_ms: probe_start.elapsed().as_millis() as u64,
                message: None,
            },
            Err(err) => UpstreamHealth {
                reachable: false,
                latency_ms: probe_start.elapsed().as_millis() as u64,
                message: Some(err.to_string()),
            },
        };

        Ok(ReadinessStatus {
            ready: recipe_db.reachable,
            recipe_db,
        })
    }
}
