//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the collaborator traits defined in
//! [`crate::domain::collaborators`].
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL storage ping
//! - [`payments`] - Stripe and PayPal HTTP clients
//! - [`config`] - environment and static configuration sources
//! - [`runtime`] - process memory and uptime via `sysinfo`

pub mod config;
pub mod payments;
pub mod persistence;
pub mod runtime;
