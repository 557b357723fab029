//! Results produced by individual probes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use super::status::Status;

/// Outcome of one dependency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub status: Status,
    pub response_time_ms: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl CheckResult {
    pub fn healthy(elapsed: Duration) -> Self {
        Self {
            status: Status::Healthy,
            response_time_ms: as_millis(elapsed),
            error_message: None,
        }
    }

    pub fn degraded(elapsed: Duration, message: impl Into<String>) -> Self {
        Self {
            status: Status::Degraded,
            response_time_ms: as_millis(elapsed),
            error_message: Some(message.into()),
        }
    }

    pub fn unhealthy(elapsed: Duration, message: impl Into<String>) -> Self {
        Self {
            status: Status::Unhealthy,
            response_time_ms: as_millis(elapsed),
            error_message: Some(message.into()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == Status::Healthy
    }
}

/// Resource probe result: a [`CheckResult`] plus process memory and uptime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    #[serde(flatten)]
    pub check: CheckResult,
    pub memory_usage_percent: u8,
    pub uptime: String,
}

/// Combined result of all payment providers.
///
/// `check` carries the combined status; `providers` keeps each provider's
/// own result so timeouts and missing credentials stay visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentsCheck {
    #[serde(flatten)]
    pub check: CheckResult,
    pub providers: BTreeMap<String, CheckResult>,
}

/// Saturating conversion of a duration to whole milliseconds.
pub fn as_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
