//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::GenerationService;

/// Values reported by the health endpoint
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub diet_provider: String,
    pub port: u16,
}

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub info: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(generation_service: GenerationService, info: ServiceInfo) -> Self {
        Self {
            generation_service: Arc::new(generation_service),
            info: Arc::new(info),
        }
    }
}
