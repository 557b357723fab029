//! Narrow interfaces to the dependencies the health checks consult.
//!
//! Every collaborator is read-only from the health subsystem's point of
//! view. Implementations live in `crate::infrastructure`; unit-test mocks are
//! generated with `mockall`.
//!
//! - [`StoragePing`] - one trivial storage round trip
//! - [`PaymentProvider`] - reachability of an external payment provider
//! - [`ConfigSource`] - key lookup with an explicit present/absent result
//! - [`ProcessRuntime`] - memory and uptime of the running process
//! - [`Clock`] - wall-clock time for report timestamps

pub mod clock;
pub mod config_source;
pub mod payment_provider;
pub mod process_runtime;
pub mod storage;

pub use clock::{Clock, SystemClock};
pub use config_source::{ConfigSource, ConfigValue};
pub use payment_provider::PaymentProvider;
pub use process_runtime::{ProcessRuntime, RuntimeSample};
pub use storage::StoragePing;

#[cfg(test)]
pub use clock::MockClock;
#[cfg(test)]
pub use config_source::MockConfigSource;
#[cfg(test)]
pub use payment_provider::MockPaymentProvider;
#[cfg(test)]
pub use process_runtime::MockProcessRuntime;
#[cfg(test)]
pub use storage::MockStoragePing;
