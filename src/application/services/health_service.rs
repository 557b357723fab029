//! Health-check orchestration.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error};

use crate::application::probes::{
    catch_panic, check_email, check_payments, check_resources, check_storage,
};
use crate::domain::collaborators::{
    Clock, ConfigSource, PaymentProvider, ProcessRuntime, StoragePing, SystemClock,
};
use crate::domain::{CheckResult, Checks, HealthReport, PaymentsCheck, SystemInfo};

/// Message placed in every slot when aggregation itself fails.
pub const AGGREGATION_FAILURE: &str = "health check failed";

/// Per-probe time limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadlines {
    pub storage: Duration,
    pub payment: Duration,
}

impl Default for Deadlines {
    fn default() -> Self {
        Self {
            storage: Duration::from_millis(3000),
            payment: Duration::from_millis(2000),
        }
    }
}

/// Runs every probe concurrently and assembles the [`HealthReport`].
///
/// Holds only read-only collaborator handles. Each call to
/// [`HealthService::check`] builds a fresh report; nothing is shared between
/// calls.
pub struct HealthService {
    storage: Arc<dyn StoragePing>,
    providers: Vec<Arc<dyn PaymentProvider>>,
    config: Arc<dyn ConfigSource>,
    runtime: Arc<dyn ProcessRuntime>,
    clock: Arc<dyn Clock>,
    deadlines: Deadlines,
}

impl HealthService {
    /// Creates a service with the system clock and default deadlines.
    pub fn new(
        storage: Arc<dyn StoragePing>,
        providers: Vec<Arc<dyn PaymentProvider>>,
        config: Arc<dyn ConfigSource>,
        runtime: Arc<dyn ProcessRuntime>,
    ) -> Self {
        Self {
            storage,
            providers,
            config,
            runtime,
            clock: Arc::new(SystemClock),
            deadlines: Deadlines::default(),
        }
    }

    pub fn with_deadlines(mut self, deadlines: Deadlines) -> Self {
        self.deadlines = deadlines;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn deadlines(&self) -> Deadlines {
        self.deadlines
    }

    /// Produces a health report. Never fails and never panics.
    ///
    /// A panic inside a single probe is confined to that probe's slot. A
    /// panic anywhere else in aggregation yields a report with every slot
    /// Unhealthy.
    pub async fn check(&self) -> HealthReport {
        match catch_panic(self.collect()).await {
            Ok(report) => report,
            Err(panic) => {
                error!(%panic, "Health aggregation failed");
                let report = HealthReport::failed(AGGREGATION_FAILURE, Utc::now());
                metrics::counter!("health_check_runs_total", "status" => report.status().as_str())
                    .increment(1);
                report
            }
        }
    }

    async fn collect(&self) -> HealthReport {
        let (database, payments, email, system) = tokio::join!(
            self.database_check(),
            self.payments_check(),
            self.email_check(),
            self.system_check(),
        );

        record_duration("database", database.response_time_ms);
        record_duration("payments", payments.check.response_time_ms);
        record_duration("email", email.response_time_ms);
        record_duration("system", system.check.response_time_ms);

        let checks = Checks {
            database,
            payments,
            email,
            system,
        };
        let report = HealthReport::assemble(checks, self.clock.now());

        debug!(status = %report.status(), "Health check completed");
        metrics::counter!("health_check_runs_total", "status" => report.status().as_str())
            .increment(1);

        report
    }

    async fn database_check(&self) -> CheckResult {
        let started = Instant::now();
        catch_panic(check_storage(self.storage.as_ref(), self.deadlines.storage))
            .await
            .unwrap_or_else(|panic| crashed("database", started, &panic))
    }

    async fn payments_check(&self) -> PaymentsCheck {
        let started = Instant::now();
        catch_panic(check_payments(&self.providers, self.deadlines.payment))
            .await
            .unwrap_or_else(|panic| PaymentsCheck {
                check: crashed("payments", started, &panic),
                providers: Default::default(),
            })
    }

    async fn email_check(&self) -> CheckResult {
        let started = Instant::now();
        catch_panic(async { check_email(self.config.as_ref()) })
            .await
            .unwrap_or_else(|panic| crashed("email", started, &panic))
    }

    async fn system_check(&self) -> SystemInfo {
        let started = Instant::now();
        catch_panic(async { check_resources(self.runtime.as_ref()) })
            .await
            .unwrap_or_else(|panic| SystemInfo {
                check: crashed("system", started, &panic),
                memory_usage_percent: 0,
                uptime: "0m".to_string(),
            })
    }
}

/// Synthesized result for a probe that panicked.
fn crashed(check: &str, started: Instant, panic: &str) -> CheckResult {
    error!(check, %panic, "Health probe panicked");
    CheckResult::unhealthy(started.elapsed(), format!("{check} check failed"))
}

fn record_duration(check: &'static str, millis: u64) {
    metrics::histogram!("health_check_duration_ms", "check" => check).record(millis as f64);
}
