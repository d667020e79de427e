use std::sync::Arc;

use nutripilot_core::application::NutriPilotService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriPilotService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriPilotService) -> Self {
        Self { args, service }
    }
}
