//! Process resource probe: memory pressure and uptime.

use std::time::Instant;

use crate::domain::collaborators::{ProcessRuntime, RuntimeSample};
use crate::domain::{CheckResult, Status, SystemInfo};

/// Usage strictly above this is Degraded.
pub const MEMORY_DEGRADED_ABOVE: u8 = 90;
/// Usage strictly above this is Unhealthy.
pub const MEMORY_UNHEALTHY_ABOVE: u8 = 95;

/// Samples the process runtime and classifies memory pressure.
///
/// Synchronous and infallible, so it carries no deadline. The reported
/// response time covers the sampling work.
pub fn check_resources(runtime: &dyn ProcessRuntime) -> SystemInfo {
    let started = Instant::now();
    let sample = runtime.sample();
    let percent = memory_usage_percent(&sample);
    let elapsed = started.elapsed();

    let check = match classify_memory(percent) {
        Status::Healthy => CheckResult::healthy(elapsed),
        Status::Degraded => CheckResult::degraded(elapsed, "memory usage high"),
        Status::Unhealthy => CheckResult::unhealthy(elapsed, "memory usage critical"),
    };

    SystemInfo {
        check,
        memory_usage_percent: percent,
        uptime: format_uptime(sample.uptime_seconds),
    }
}

/// `used / total` as a rounded integer percentage, clamped to 0..=100.
pub fn memory_usage_percent(sample: &RuntimeSample) -> u8 {
    if sample.total_bytes == 0 {
        return 0;
    }
    let ratio = sample.used_bytes as f64 / sample.total_bytes as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn classify_memory(percent: u8) -> Status {
    if percent > MEMORY_UNHEALTHY_ABOVE {
        Status::Unhealthy
    } else if percent > MEMORY_DEGRADED_ABOVE {
        Status::Degraded
    } else {
        Status::Healthy
    }
}

/// Formats seconds as `"<d>d <h>h <m>m"`, dropping leading zero units.
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
