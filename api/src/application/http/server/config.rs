use axum::extract::State;
use labelsight_core::domain::capture::FacingMode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

/// Settings the capture page needs before it opens the camera.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClientConfig {
    pub default_facing_mode: FacingMode,
    pub max_image_bytes: usize,
    pub model: String,
    pub app_version: String,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get capture client configuration",
    responses(
        (status = 200, body = ClientConfig)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Response<ClientConfig> {
    Response::OK(ClientConfig {
        default_facing_mode: state.args.capture.default_facing_mode,
        max_image_bytes: state.args.capture.max_image_bytes,
        model: state.args.llm.gemini_model.clone(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
