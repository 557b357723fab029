//! PostgreSQL implementation of the storage ping.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::collaborators::StoragePing;
use crate::error::ProbeError;

/// Storage ping over a shared connection pool.
///
/// Acquiring a connection is part of the ping, so an exhausted pool shows
/// up as a failed (or timed-out) check.
pub struct PgStorage {
    pool: Arc<PgPool>,
}

impl PgStorage {
    /// Creates a new storage ping with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoragePing for PgStorage {
    async fn ping(&self) -> Result<(), ProbeError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
