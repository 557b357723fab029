//! Individual dependency probes.
//!
//! Every probe resolves to a result value and never returns an error.
//! Network probes are bounded by [`deadline::with_deadline`].

pub mod deadline;
pub mod email;
pub mod guard;
pub mod payments;
pub mod resource;
pub mod storage;

pub use deadline::with_deadline;
pub use email::check_email;
pub use guard::catch_panic;
pub use payments::{check_payments, check_provider};
pub use resource::check_resources;
pub use storage::check_storage;
