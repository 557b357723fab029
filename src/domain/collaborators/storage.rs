//! Storage reachability interface.

use async_trait::async_trait;

use crate::error::ProbeError;

/// Issues one trivial round trip against the relational store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStorage`] - PostgreSQL `SELECT 1`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoragePing: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ProbeError::Storage`] when the query cannot complete.
    async fn ping(&self) -> Result<(), ProbeError>;
}
