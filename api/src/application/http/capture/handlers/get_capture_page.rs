use axum::{extract::State, response::Html};

use crate::application::http::server::app_state::AppState;

const CAPTURE_PAGE: &str = include_str!("../../../../../assets/capture.html");

const ROOT_PATH_PLACEHOLDER: &str = "{{ROOT_PATH}}";

/// Serves the camera capture surface. The page calls back into this server
/// relative to the configured root path.
pub async fn get_capture_page(State(state): State<AppState>) -> Html<String> {
    Html(CAPTURE_PAGE.replace(ROOT_PATH_PLACEHOLDER, &state.args.server.root_path))
}
