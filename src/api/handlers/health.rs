//! Handlers for health check endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::LivenessResponse;
use crate::domain::HealthReport;
use crate::state::AppState;

/// Returns the aggregated dependency health report.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: overall status is `healthy` or `degraded`
/// - **503 Service Unavailable**: overall status is `unhealthy`
///
/// The body is the same [`HealthReport`] in both cases.
///
/// # Components Checked
///
/// 1. **database**: `SELECT 1` within 3 s
/// 2. **payments**: Stripe and PayPal, 2 s each; any failure is `degraded`
/// 3. **email**: presence of SMTP settings; absence is `degraded`
/// 4. **system**: process memory pressure and uptime
///
/// # Response
///
/// ```json
/// {
///   "status": "degraded",
///   "timestamp": "2026-07-01T08:30:00.120Z",
///   "checks": {
///     "database": { "status": "healthy", "responseTimeMs": 4 },
///     "payments": {
///       "status": "degraded",
///       "responseTimeMs": 2000,
///       "errorMessage": "some payment services unavailable",
///       "providers": {
///         "paypal": { "status": "unhealthy", "responseTimeMs": 2000, "errorMessage": "paypal check timeout" },
///         "stripe": { "status": "healthy", "responseTimeMs": 231 }
///       }
///     },
///     "email": { "status": "healthy", "responseTimeMs": 0 },
///     "system": { "status": "healthy", "responseTimeMs": 0, "memoryUsagePercent": 12, "uptime": "2d 3h 14m" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthReport>, (StatusCode, Json<HealthReport>)> {
    let report = state.health_service.check().await;

    if report.status().is_serving() {
        Ok(Json(report))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(report)))
    }
}

/// Reports that the process is up, without consulting any dependency.
///
/// # Endpoint
///
/// `GET /health/live`
pub async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
