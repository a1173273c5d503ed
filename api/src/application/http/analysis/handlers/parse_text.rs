use labelsight_core::domain::analysis::{entities::AnalysisRecord, parser::parse_analysis_text};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::ParseTextRequest,
    server::api_entities::{
        api_error::{ApiError, ApiErrorResponse, ValidateJson},
        response::Response,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParseTextResponse {
    pub records: Vec<AnalysisRecord>,
}

#[utoipa::path(
    post,
    path = "/parse",
    tag = "analysis",
    summary = "Parse model text into ingredient records",
    description = "Runs only the line parser, without calling the vision model",
    request_body = ParseTextRequest,
    responses(
        (status = 200, body = ParseTextResponse),
        (status = 400, body = ApiErrorResponse)
    )
)]
pub async fn parse_text(
    ValidateJson(payload): ValidateJson<ParseTextRequest>,
) -> Result<Response<ParseTextResponse>, ApiError> {
    Ok(Response::OK(ParseTextResponse {
        records: parse_analysis_text(&payload.text),
    }))
}
