use std::sync::Arc;

use mealdex_core::application::MealdexService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MealdexService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealdexService) -> Self {
        Self { args, service }
    }
}
