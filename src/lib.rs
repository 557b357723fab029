//! # Camp Registration
//!
//! Health-check aggregation for the camp-registration service: decides
//! whether the running process is fit to receive traffic.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Status, per-check results, the report, and
//!   collaborator traits
//! - **Application Layer** ([`application`]) - Probes, deadline and panic
//!   guards, and the [`application::services::HealthService`] orchestrator
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL, payment
//!   provider clients, configuration and process sampling
//! - **API Layer** ([`api`]) - `GET /health` and `GET /health/live`
//!
//! ## Checks
//!
//! | Check | Deadline | Failure status |
//! |---|---|---|
//! | `database` | 3 s | unhealthy |
//! | `payments` | 2 s per provider | degraded |
//! | `email` | none (local) | degraded |
//! | `system` | none (local) | degraded above 90 %, unhealthy above 95 % |
//!
//! The overall status is the most severe individual status. `GET /health`
//! answers 200 unless it is `unhealthy`, in which case it answers 503.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::ProbeError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Deadlines, HealthService};
    pub use crate::domain::collaborators::{
        Clock, ConfigSource, ConfigValue, PaymentProvider, ProcessRuntime, RuntimeSample,
        StoragePing,
    };
    pub use crate::domain::{CheckResult, HealthReport, Status};
    pub use crate::error::ProbeError;
    pub use crate::state::AppState;
}
