//! Database schema initialization.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Creates any missing tables and indexes from the embedded SQL file.
    /// Every statement is `IF NOT EXISTS`, so reopening a database is a no-op.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}
