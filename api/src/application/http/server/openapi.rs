use crate::application::http::{
    analysis::router::AnalysisApiDoc,
    health::{__path_get_health, __path_get_readiness},
    relay::handlers::relay_image::__path_relay_image,
    server::config::__path_get_config,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LabelSight API"
    ),
    paths(relay_image, get_config, get_health, get_readiness),
    nest(
        (path = "/analysis", api = AnalysisApiDoc),
    )
)]
pub struct ApiDoc;
