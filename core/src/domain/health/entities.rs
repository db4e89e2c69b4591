use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpstreamHealth {
    pub reachable: bool,
    pub latency_ms: u64,
    pub message: Option<String>,
}

/// Readiness probes the recipe upstream only. The nutrition provider is
/// metered per request and is not called from a probe loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReadinessStatus {
    pub ready: bool,
    pub recipe_db: UpstreamHealth,
}
