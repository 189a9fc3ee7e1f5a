use std::sync::Arc;

use refresh_core::application::RefreshService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RefreshService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RefreshService) -> Self {
        Self { args, service }
    }
}
