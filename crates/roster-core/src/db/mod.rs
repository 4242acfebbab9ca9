//! SQLite persistence for planner snapshots.
//!
//! The core stores never touch the database; this module loads a
//! [`Snapshot`](crate::planner::Snapshot) to seed them and writes the whole
//! snapshot back after a session. List order is kept in a `position` column
//! so insertion order (and thus same-start tie-breaking) survives a reload.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod schema;
pub mod snapshot_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database at `path` and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
