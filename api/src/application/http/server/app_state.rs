use std::sync::Arc;

use labelsight_core::application::LabelsightService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LabelsightService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LabelsightService) -> Self {
        Self { args, service }
    }
}
