//! HTTP layer for the health endpoints.
//!
//! # Modules
//!
//! - [`dto`] - response bodies not covered by domain types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
