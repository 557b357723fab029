//! Storage reachability probe.

use std::time::Duration;
use tokio::time::Instant;
use tracing::warn;

use super::deadline::with_deadline;
use crate::domain::CheckResult;
use crate::domain::collaborators::StoragePing;

pub const STORAGE_CHECK: &str = "database";
pub const STORAGE_FAILURE: &str = "storage connectivity failed";

/// Pings storage once, bounded by `deadline`.
///
/// The driver error is logged and replaced by a fixed message so connection
/// details never reach the report.
pub async fn check_storage(storage: &dyn StoragePing, deadline: Duration) -> CheckResult {
    with_deadline(STORAGE_CHECK, deadline, async {
        let started = Instant::now();
        match storage.ping().await {
            Ok(()) => CheckResult::healthy(started.elapsed()),
            Err(e) => {
                warn!(error = %e, "Storage health check failed");
                CheckResult::unhealthy(started.elapsed(), STORAGE_FAILURE)
            }
        }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Status;
    use crate::domain::collaborators::MockStoragePing;
    use crate::error::ProbeError;
    use async_trait::async_trait;

    struct HangingStorage;

    #[async_trait]
    impl StoragePing for HangingStorage {
        async fn ping(&self) -> Result<(), ProbeError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_successful_ping_is_healthy() {
        let mut storage = MockStoragePing::new();
        storage.expect_ping().times(1).returning(|| Ok(()));

        let result = check_storage(&storage, Duration::from_millis(3000)).await;

        assert_eq!(result.status, Status::Healthy);
        assert!(result.error_message.is_none());
    }

    #[tokio::test]
    async fn test_driver_error_is_not_surfaced() {
        let mut storage = MockStoragePing::new();
        storage
            .expect_ping()
            .times(1)
            .returning(|| Err(ProbeError::Storage(sqlx::Error::PoolTimedOut)));

        let result = check_storage(&storage, Duration::from_millis(3000)).await;

        assert_eq!(result.status, Status::Unhealthy);
        assert_eq!(result.error_message.as_deref(), Some(STORAGE_FAILURE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_storage_times_out() {
        let started = Instant::now();

        let result = check_storage(&HangingStorage, Duration::from_millis(3000)).await;

        assert_eq!(started.elapsed(), Duration::from_millis(3000));
        assert_eq!(result.status, Status::Unhealthy);
        assert_eq!(result.response_time_ms, 3000);
        assert_eq!(result.error_message.as_deref(), Some("database check timeout"));
    }
}
