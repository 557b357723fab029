//! Per-probe deadline.

use std::future::Future;
use std::time::Duration;
use tokio::time;
use tracing::warn;

use crate::domain::CheckResult;
use crate::domain::check::as_millis;

/// Runs `probe` against a timer of length `deadline`.
///
/// If the timer fires first the probe future is dropped, which aborts any
/// in-flight request it owns, and an Unhealthy result reporting exactly
/// `deadline` is returned.
pub async fn with_deadline<F>(name: &str, deadline: Duration, probe: F) -> CheckResult
where
    F: Future<Output = CheckResult>,
{
    match time::timeout(deadline, probe).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                check = name,
                deadline_ms = as_millis(deadline),
                "Health check timed out"
            );
            CheckResult::unhealthy(deadline, format!("{name} check timeout"))
        }
    }
}
