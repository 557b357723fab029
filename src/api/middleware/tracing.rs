//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Spans and responses are logged at `INFO` with latency in milliseconds.
/// A `503` from `/health` is classified as a server error; it is logged at
/// `WARN` rather than the default `ERROR`, since an unhealthy dependency is
/// reported data, not a fault of this service.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/health version=HTTP/1.1}: finished processing request latency=412 ms status=200
/// WARN request{method=GET uri=/health version=HTTP/1.1}: response failed classification=Status code: 503 Service Unavailable latency=3001 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
