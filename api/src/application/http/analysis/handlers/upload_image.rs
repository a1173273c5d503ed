use axum::extract::{Multipart, State};
use labelsight_core::domain::{
    analysis::{ports::AnalysisService, value_objects::AnalyzeImageInput},
    capture::entities::{DEFAULT_IMAGE_MIME_TYPE, ImageFrame},
};
use tracing::error;

use crate::application::http::{
    analysis::handlers::analyze_image::AnalyzeImageResponse,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/upload",
    tag = "analysis",
    summary = "Analyze ingredients from an uploaded image",
    description = "Multipart variant of image analysis. The image goes in the `image` field; its content type selects the MIME type (JPEG when absent).",
    responses(
        (status = 200, body = AnalyzeImageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse),
        (status = 415, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    )
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let max_image_bytes = state.service.max_image_bytes();
    let mut image: Option<ImageFrame> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::from(e)
    })? {
        let name = field.name().unwrap_or("").to_string();

        if name != "image" {
            continue;
        }

        let mime_type = field
            .content_type()
            .unwrap_or(DEFAULT_IMAGE_MIME_TYPE)
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| {
                error!("Failed to read image field: {}", e);
                ApiError::from(e)
            })?;

        if data.len() > max_image_bytes {
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                max_image_bytes
            )));
        }

        image = Some(ImageFrame::new(data.to_vec(), &mime_type)?);
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let report = state
        .service
        .analyze_image(AnalyzeImageInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeImageResponse { data: report }))
}
