//! [`crate::domain::collaborators::ConfigSource`] implementations.
//!
//! - [`EnvConfigSource`] - reads the process environment
//! - [`StaticConfigSource`] - fixed key/value map for tests and embedding

mod env_config;

pub use env_config::{EnvConfigSource, StaticConfigSource};
