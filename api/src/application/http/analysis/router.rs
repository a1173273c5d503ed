use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    parse_text::{__path_parse_text, parse_text},
    upload_image::{__path_upload_image, upload_image},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_image, upload_image, parse_text))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analysis/image", state.args.server.root_path),
            post(analyze_image),
        )
        .route(
            &format!("{}/analysis/upload", state.args.server.root_path),
            post(upload_image),
        )
        .route(
            &format!("{}/analysis/parse", state.args.server.root_path),
            post(parse_text),
        )
}
