use crate::domain::{
    analysis::ports::VisionModelClient,
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::VisionHealthStatus, ports::HealthCheckService},
};

impl<V> HealthCheckService for Service<V>
where
    V: VisionModelClient,
{
    async fn readiness(&self) -> Result<VisionHealthStatus, CoreError> {
        Ok(VisionHealthStatus {
            model: self.vision_client.model_name(),
            credential_configured: self.vision_client.has_credential(),
        })
    }
}
