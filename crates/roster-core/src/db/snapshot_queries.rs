//! Snapshot load and save queries.

use jiff::civil::DateTime;
use rusqlite::{params, types::Type, Row};
use ulid::Ulid;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Appointment, Details, Resource, ResourceType},
    planner::Snapshot,
};

const SELECT_RESOURCES_SQL: &str =
    "SELECT id, name, kind, details FROM resources ORDER BY position";
const SELECT_APPOINTMENTS_SQL: &str = "SELECT id, title, start_at, end_at, resource_id, sort_order, details FROM appointments ORDER BY position";
const INSERT_RESOURCE_SQL: &str =
    "INSERT INTO resources (position, id, name, kind, details) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_APPOINTMENT_SQL: &str = "INSERT INTO appointments (position, id, title, start_at, end_at, resource_id, sort_order, details) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const CLEAR_RESOURCES_SQL: &str = "DELETE FROM resources";
const CLEAR_APPOINTMENTS_SQL: &str = "DELETE FROM appointments";

impl super::Database {
    /// Loads every resource and appointment in their stored list order.
    pub fn load_snapshot(&self) -> Result<Snapshot> {
        let mut stmt = self
            .connection
            .prepare(SELECT_RESOURCES_SQL)
            .db_context("Failed to prepare resource query")?;
        let resources = stmt
            .query_map([], |row| {
                Ok(Resource {
                    id: ulid_column(row, 0)?,
                    name: row.get(1)?,
                    kind: kind_column(row, 2)?,
                    details: details_column(row, 3)?,
                })
            })
            .db_context("Failed to query resources")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read resource row")?;

        let mut stmt = self
            .connection
            .prepare(SELECT_APPOINTMENTS_SQL)
            .db_context("Failed to prepare appointment query")?;
        let appointments = stmt
            .query_map([], |row| {
                Ok(Appointment {
                    id: ulid_column(row, 0)?,
                    title: row.get(1)?,
                    start: datetime_column(row, 2)?,
                    end: datetime_column(row, 3)?,
                    resource_id: ulid_column(row, 4)?,
                    order: row.get(5)?,
                    details: details_column(row, 6)?,
                })
            })
            .db_context("Failed to query appointments")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read appointment row")?;

        Ok(Snapshot {
            resources,
            appointments,
        })
    }

    /// Replaces the stored contents with `snapshot` in one transaction.
    pub fn save_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(CLEAR_APPOINTMENTS_SQL, [])
            .db_context("Failed to clear appointments")?;
        tx.execute(CLEAR_RESOURCES_SQL, [])
            .db_context("Failed to clear resources")?;

        {
            let mut insert = tx
                .prepare(INSERT_RESOURCE_SQL)
                .db_context("Failed to prepare resource insert")?;
            for (position, resource) in snapshot.resources.iter().enumerate() {
                let details = serde_json::to_string(&resource.details)?;
                insert
                    .execute(params![
                        position as i64,
                        resource.id.to_string(),
                        resource.name,
                        resource.kind.as_str(),
                        details,
                    ])
                    .db_context("Failed to insert resource")?;
            }

            let mut insert = tx
                .prepare(INSERT_APPOINTMENT_SQL)
                .db_context("Failed to prepare appointment insert")?;
            for (position, appointment) in snapshot.appointments.iter().enumerate() {
                let details = serde_json::to_string(&appointment.details)?;
                insert
                    .execute(params![
                        position as i64,
                        appointment.id.to_string(),
                        appointment.title,
                        appointment.start.to_string(),
                        appointment.end.to_string(),
                        appointment.resource_id.to_string(),
                        appointment.order,
                        details,
                    ])
                    .db_context("Failed to insert appointment")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")
    }
}

fn conversion_error<E>(index: usize, error: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error))
}

fn ulid_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Ulid> {
    let raw: String = row.get(index)?;
    raw.parse::<Ulid>().map_err(|e| conversion_error(index, e))
}

fn datetime_column(row: &Row<'_>, index: usize) -> rusqlite::Result<DateTime> {
    let raw: String = row.get(index)?;
    raw.parse::<DateTime>().map_err(|e| conversion_error(index, e))
}

fn kind_column(row: &Row<'_>, index: usize) -> rusqlite::Result<ResourceType> {
    let raw: String = row.get(index)?;
    raw.parse::<ResourceType>().map_err(|e| {
        conversion_error(
            index,
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}

fn details_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Details> {
    let raw: String = row.get(index)?;
    serde_json::from_str(&raw).map_err(|e| conversion_error(index, e))
}
