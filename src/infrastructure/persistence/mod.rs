//! PostgreSQL-backed collaborators.
//!
//! - [`PgStorage`] - `SELECT 1` round trip for the database check

pub mod pg_storage;

pub use pg_storage::PgStorage;
