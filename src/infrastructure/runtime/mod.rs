//! Process runtime sampling.

mod sysinfo_runtime;

pub use sysinfo_runtime::SysinfoRuntime;
