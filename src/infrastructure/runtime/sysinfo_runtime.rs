//! [`ProcessRuntime`] backed by the `sysinfo` crate.

use std::time::Instant;
use sysinfo::{CGroupLimits, Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use tracing::warn;

use crate::domain::collaborators::{ProcessRuntime, RuntimeSample};

/// Samples resident memory against the memory actually available to the
/// process.
///
/// Inside a cgroup whose memory limit is below host RAM, the cgroup's RSS is
/// measured against that limit. Otherwise the process RSS is measured against
/// total system memory.
///
/// A fresh [`System`] is built on every sample, so no state is carried
/// between health checks. When the process cannot be inspected, used memory
/// reads as 0 and uptime falls back to the time since construction.
pub struct SysinfoRuntime {
    pid: Option<Pid>,
    started: Instant,
}

impl SysinfoRuntime {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                warn!("Cannot resolve current pid, memory usage will read as 0: {}", e);
                None
            }
        };

        Self {
            pid,
            started: Instant::now(),
        }
    }
}

impl Default for SysinfoRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRuntime for SysinfoRuntime {
    fn sample(&self) -> RuntimeSample {
        let mut system = System::new();
        system.refresh_memory();

        let process = self.pid.and_then(|pid| {
            system.refresh_processes_specifics(
                ProcessesToUpdate::Some(&[pid]),
                false,
                ProcessRefreshKind::new().with_memory(),
            );
            system
                .process(pid)
                .map(|process| (process.memory(), process.run_time()))
        });

        let (process_rss, uptime_seconds) = match process {
            Some((rss, run_time)) => (Some(rss), run_time),
            None => (None, self.started.elapsed().as_secs()),
        };

        let (used_bytes, total_bytes) =
            memory_budget(process_rss, system.total_memory(), system.cgroup_limits());

        RuntimeSample {
            used_bytes,
            total_bytes,
            uptime_seconds,
        }
    }
}

/// Picks `(used, total)` bytes. A cgroup only counts when its limit is set
/// and tighter than host RAM.
fn memory_budget(
    process_rss: Option<u64>,
    host_total: u64,
    cgroup: Option<CGroupLimits>,
) -> (u64, u64) {
    match cgroup {
        Some(limits) if limits.total_memory > 0 && limits.total_memory < host_total => {
            (limits.rss, limits.total_memory)
        }
        _ => (process_rss.unwrap_or(0), host_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_reports_plausible_values() {
        let sample = SysinfoRuntime::new().sample();

        assert!(sample.total_bytes > 0);
        assert!(sample.used_bytes <= sample.total_bytes);
    }

    const MIB: u64 = 1024 * 1024;
    const GIB: u64 = 1024 * MIB;

    fn limits(total_memory: u64, rss: u64) -> Option<CGroupLimits> {
        Some(CGroupLimits {
            total_memory,
            rss,
            ..CGroupLimits::default()
        })
    }

    #[test]
    fn test_cgroup_limit_below_host_is_the_denominator() {
        let budget = memory_budget(Some(40 * MIB), 64 * GIB, limits(512 * MIB, 490 * MIB));

        assert_eq!(budget, (490 * MIB, 512 * MIB));
    }

    #[test]
    fn test_unconstrained_cgroup_uses_process_rss_over_host() {
        let budget = memory_budget(Some(40 * MIB), 6 * GIB, limits(6 * GIB, 3 * GIB));

        assert_eq!(budget, (40 * MIB, 6 * GIB));
    }

    #[test]
    fn test_without_cgroup_falls_back_to_host_memory() {
        assert_eq!(memory_budget(Some(40 * MIB), 8 * GIB, None), (40 * MIB, 8 * GIB));
        assert_eq!(memory_budget(None, 8 * GIB, None), (0, 8 * GIB));
        assert_eq!(memory_budget(None, 8 * GIB, limits(0, 0)), (0, 8 * GIB));
    }
}
