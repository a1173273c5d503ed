use axum::{Router, extract::State, routing::get};
use labelsight_core::domain::health::{entities::VisionHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health", root_path), get(get_health))
        .route(&format!("{}/health/ready", root_path), get(get_readiness))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn get_health() -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Ready once a vision model credential is configured",
    responses(
        (status = 200, body = VisionHealthStatus),
        (status = 503, description = "No vision model credential configured")
    )
)]
pub async fn get_readiness(
    State(state): State<AppState>,
) -> Result<Response<VisionHealthStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    if !status.is_ready() {
        return Err(ApiError::ServiceUnavailable(format!(
            "No API key configured for vision model {}",
            status.model
        )));
    }

    Ok(Response::OK(status))
}
