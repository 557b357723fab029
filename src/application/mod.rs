//! Application layer: probes and the orchestration that runs them.
//!
//! - [`probes`] - one function per dependency check, plus the deadline and
//!   panic-guard combinators
//! - [`services::health_service::HealthService`] - concurrent fan-out, join
//!   and report assembly

pub mod probes;
pub mod services;
