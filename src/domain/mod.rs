//! Domain layer of the health-check subsystem.
//!
//! Holds the value types that make up a health report and the collaborator
//! interfaces the probes consult. Nothing here performs I/O.
//!
//! # Modules
//!
//! - [`status`] - tri-state [`Status`] and the [`reduce`] function
//! - [`check`] - per-probe results
//! - [`report`] - the assembled [`HealthReport`]
//! - [`collaborators`] - traits implemented by `crate::infrastructure`

pub mod check;
pub mod collaborators;
pub mod report;
pub mod status;

pub use check::{CheckResult, PaymentsCheck, SystemInfo};
pub use report::{Checks, HealthReport};
pub use status::{Status, reduce};
