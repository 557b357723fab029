//! Process memory and uptime source.

/// One reading of the process's resource counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuntimeSample {
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub uptime_seconds: u64,
}

/// Synchronous, infallible sampler of process resources.
///
/// # Implementations
///
/// - [`crate::infrastructure::runtime::SysinfoRuntime`]
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRuntime: Send + Sync {
    fn sample(&self) -> RuntimeSample;
}
