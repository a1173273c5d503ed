use axum::{Router, routing::post};

use super::handlers::relay_image::relay_image;
use crate::application::http::server::app_state::AppState;

pub fn relay_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/analyze-image", state.args.server.root_path),
        post(relay_image),
    )
}
