use axum::extract::State;
use labelsight_core::domain::{
    analysis::{ports::AnalysisService, value_objects::AnalyzeImageInput},
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

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RelayImageResponse {
    pub text: String,
}

#[utoipa::path(
    post,
    path = "/analyze-image",
    tag = "analysis",
    summary = "Relay an image to the vision model",
    description = "Sends the captured image to the vision model with the ingredient prompt and returns its raw text, unparsed",
    request_body = AnalyzeImageRequest,
    responses(
        (status = 200, body = RelayImageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    )
)]
pub async fn relay_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeImageRequest>,
) -> Result<Response<RelayImageResponse>, ApiError> {
    let image = ImageFrame::from_data_url(&payload.image_data)?;

    let text = state
        .service
        .describe_image(AnalyzeImageInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RelayImageResponse { text }))
}
