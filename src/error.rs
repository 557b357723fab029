//! Error types raised by health-check collaborators.
//!
//! These errors never reach the HTTP layer. Probes translate every
//! [`ProbeError`] into a [`crate::domain::CheckResult`] and log the cause.

use thiserror::Error;

/// Failure of a single dependency ping.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Storage driver error (connection refused, pool timeout, query failure).
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Transport-level failure talking to an external provider.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered, but not with a success status.
    #[error("{provider} responded with status {status}")]
    UnexpectedStatus { provider: String, status: u16 },

    /// Required credentials are absent from configuration.
    #[error("{0} credentials not configured")]
    NotConfigured(String),
}

impl ProbeError {
    /// Returns `true` when the failure is caused by missing configuration
    /// rather than by the dependency itself.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured(_))
    }
}
