use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VisionHealthStatus {
    pub model: String,
    pub credential_configured: bool,
}

impl VisionHealthStatus {
    pub fn is_ready(&self) -> bool {
        self.credential_configured
    }
}
