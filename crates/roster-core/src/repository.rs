//! Async access to the snapshot database.
//!
//! SQLite work is blocking, so every call runs on tokio's blocking pool and
//! opens its own connection, leaving the in-memory [`Planner`] free of I/O.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use crate::{
    db::Database,
    error::{Result, ResultExt, RosterError},
    planner::{Planner, Snapshot},
    view::DateRange,
};

/// Handle to the database file holding planner snapshots.
#[derive(Debug, Clone)]
pub struct Repository {
    db_path: PathBuf,
}

impl Repository {
    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Loads the stored snapshot.
    pub async fn load(&self) -> Result<Snapshot> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.load_snapshot()
        })
        .await
        .with_context("Task join error")?
    }

    /// Loads the stored snapshot into a planner showing `range`.
    pub async fn open_planner(&self, range: DateRange) -> Result<Planner> {
        let snapshot = self.load().await?;
        debug!(
            "Loaded {} resources and {} appointments from {}",
            snapshot.resources.len(),
            snapshot.appointments.len(),
            self.db_path.display()
        );
        Ok(Planner::from_snapshot(snapshot, range))
    }

    /// Replaces the stored snapshot with the planner's current state.
    pub async fn save(&self, planner: &Planner) -> Result<()> {
        let db_path = self.db_path.clone();
        let snapshot = planner.snapshot();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_snapshot(&snapshot)
        })
        .await
        .with_context("Task join error")?
    }
}

/// Builder for creating and configuring [`Repository`] instances.
#[derive(Debug, Clone, Default)]
pub struct RepositoryBuilder {
    database_path: Option<PathBuf>,
}

impl RepositoryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/roster/roster.db` or `~/.local/share/roster/roster.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the repository, creating the database file and schema.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::FileSystem` if the database directory cannot be
    /// created, `RosterError::XdgDirectory` if no default location exists,
    /// and `RosterError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Repository> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| RosterError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(|_| ()))
            .await
            .with_context("Task join error")??;

        Ok(Repository { db_path })
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("roster")
            .place_data_file("roster.db")
            .map_err(|e| RosterError::XdgDirectory(e.to_string()))
    }
}
