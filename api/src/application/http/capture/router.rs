use axum::{Router, routing::get};

use super::handlers::get_capture_page::get_capture_page;
use crate::application::http::server::app_state::AppState;

pub fn capture_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();
    let router = Router::new().route(&format!("{}/", root_path), get(get_capture_page));

    if root_path.is_empty() {
        return router;
    }

    router.route(&root_path, get(get_capture_page))
}
