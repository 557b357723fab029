//! The externally visible aggregate of one health-check run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

use super::check::{CheckResult, PaymentsCheck, SystemInfo};
use super::status::{Status, reduce};

/// The four named checks. A struct rather than a map, so no slot can be
/// missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checks {
    pub database: CheckResult,
    pub payments: PaymentsCheck,
    pub email: CheckResult,
    pub system: SystemInfo,
}

impl Checks {
    /// Statuses of every slot, in declaration order.
    pub fn statuses(&self) -> [Status; 4] {
        [
            self.database.status,
            self.payments.check.status,
            self.email.status,
            self.system.check.status,
        ]
    }

    /// Every slot Unhealthy with the same message.
    pub fn all_unhealthy(message: &str) -> Self {
        Self {
            database: CheckResult::unhealthy(Duration::ZERO, message),
            payments: PaymentsCheck {
                check: CheckResult::unhealthy(Duration::ZERO, message),
                providers: BTreeMap::new(),
            },
            email: CheckResult::unhealthy(Duration::ZERO, message),
            system: SystemInfo {
                check: CheckResult::unhealthy(Duration::ZERO, message),
                memory_usage_percent: 0,
                uptime: "0m".to_string(),
            },
        }
    }
}

/// Health report returned by `GET /health`.
///
/// The overall status is derived from `checks` in [`HealthReport::assemble`]
/// and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    status: Status,
    timestamp: DateTime<Utc>,
    checks: Checks,
}

impl HealthReport {
    pub fn assemble(checks: Checks, timestamp: DateTime<Utc>) -> Self {
        Self {
            status: reduce(checks.statuses()),
            timestamp,
            checks,
        }
    }

    /// Report used when aggregation itself failed.
    pub fn failed(message: &str, timestamp: DateTime<Utc>) -> Self {
        Self::assemble(Checks::all_unhealthy(message), timestamp)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn checks(&self) -> &Checks {
        &self.checks
    }
}
