use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageRequest {
    /// `data:image/jpeg;base64,...` as produced by `canvas.toDataURL`.
    #[validate(length(min = 1, message = "imageData must not be empty"))]
    pub image_data: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ParseTextRequest {
    #[validate(length(
        max = 100000,
        message = "text must be at most 100000 characters"
    ))]
    pub text: String,
}
