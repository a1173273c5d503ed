use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::VisionHealthStatus};

pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> impl Future<Output = Result<VisionHealthStatus, CoreError>> + Send;
}
