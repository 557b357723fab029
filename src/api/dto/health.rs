//! DTOs for health check endpoints.

use serde::Serialize;

/// Liveness probe response.
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
    pub version: &'static str,
}
