//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::HealthService;

#[derive(Clone)]
pub struct AppState {
    pub health_service: Arc<HealthService>,
}

impl AppState {
    pub fn new(health_service: Arc<HealthService>) -> Self {
        Self { health_service }
    }
}
