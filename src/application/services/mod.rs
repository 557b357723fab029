//! Services consumed by HTTP handlers.

pub mod health_service;

pub use health_service::{Deadlines, HealthService};
