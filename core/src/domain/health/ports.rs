use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::ReadinessStatus};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    /// Liveness: seconds since the service started.
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn readiness(&self) -> impl Future<Output = Result<ReadinessStatus, CoreError>> + Send;
}
