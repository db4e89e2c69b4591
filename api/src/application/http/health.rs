use axum::extract::State;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealdex_core::domain::health::{entities::ReadinessStatus, ports::HealthCheckService};

#[derive(OpenApi)]
#[openapi(paths(health, ready))]
pub struct HealthApiDoc;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub data: ReadinessStatus,
}

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/health", state.args.server.root_path),
            get(health),
        )
        .route(
            &format!("{}/health/ready", state.args.server.root_path),
            get(ready),
        )
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let uptime_secs = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "ok",
        uptime_secs,
    }))
}

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness",
    description = "Probes the recipe database upstream with a cheap list call",
    responses(
        (status = 200, body = ReadinessResponse),
        (status = 503, description = "Recipe upstream unreachable")
    ),
)]
pub async fn ready(State(state): State<AppState>) -> Result<Response<ReadinessResponse>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    if !status.ready {
        let message = status
            .recipe_db
            .message
            .unwrap_or_else(|| "recipe database unreachable".to_string());
        return Err(ApiError::ServiceUnavailable(message));
    }

    Ok(Response::OK(ReadinessResponse { data: status }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;

    use super::*;
    use crate::application::http::server::http_server::{router, state};
    use crate::args::Args;
    use clap::Parser;

    fn test_args() -> Arc<Args> {
        Arc::new(Args::parse_from([
            "mealdex-api",
            "--nutrition-api-key",
            "test-key",
        ]))
    }

    #[tokio::test]
    async fn health_route_reports_ok_without_touching_upstreams() {
        let state = state(test_args()).await.unwrap();
        let app = router(state).unwrap();
        let server = TestServer::new(app);

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(body["uptime_secs"].as_u64().is_some());
    }

    #[tokio::test]
    async fn unknown_route_is_a_404() {
        let state = state(test_args()).await.unwrap();
        let app = router(state).unwrap();
        let server = TestServer::new(app);

        let response = server.get("/api/v1/does-not-exist").await;

        response.assert_status_not_found();
    }
}
