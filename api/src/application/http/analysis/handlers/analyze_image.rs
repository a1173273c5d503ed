use axum::extract::State;
use labelsight_core::domain::{
    analysis::{entities::AnalysisReport, ports::AnalysisService, value_objects::AnalyzeImageInput},
    capture::entities::ImageFrame,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::AnalyzeImageRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeImageResponse {
    pub data: AnalysisReport,
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "analysis",
    summary = "Analyze ingredients from a captured image",
    description = "Relays a data-URL image to the vision model and parses the answer into per-ingredient records. An answer with no recognizable ingredients yields an empty list.",
    request_body = AnalyzeImageRequest,
    responses(
        (status = 200, body = AnalyzeImageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse),
        (status = 415, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    )
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeImageRequest>,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let image = ImageFrame::from_data_url(&payload.image_data)?;

    let report = state
        .service
        .analyze_image(AnalyzeImageInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeImageResponse { data: report }))
}
