//! Appointment model definition and validation.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use super::Details;
use crate::{
    error::{Result, ValidationErrors},
    params::{CreateAppointment, UpdateAppointment},
};

/// Longest accepted title, in characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// A time-bounded booking assigned to exactly one resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Unique identifier, generated on creation
    pub id: Ulid,

    /// Short title shown in the grid cell
    pub title: String,

    /// Start of the booking; decides which slot the appointment renders in
    pub start: DateTime,

    /// End of the booking
    pub end: DateTime,

    /// Resource the booking is assigned to (not checked against the
    /// resource store)
    pub resource_id: Ulid,

    /// Tie-breaker for appointments sharing a cell
    #[serde(default)]
    pub order: i32,

    /// Open extension values
    #[serde(default)]
    pub details: Details,
}

impl Appointment {
    /// Validates `params` and builds an appointment with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RosterError::Validation`] when the title is empty or
    /// too long, or when `end` is before `start`.
    pub fn new(params: CreateAppointment) -> Result<Self> {
        let appointment = Self {
            id: Ulid::new(),
            title: params.title,
            start: params.start,
            end: params.end,
            resource_id: params.resource_id,
            order: params.order,
            details: params.details,
        };
        appointment.validate()?;
        Ok(appointment)
    }

    /// Creation-time checks: title length and `end >= start`.
    pub fn validate(&self) -> Result<()> {
        let mut errors = ValidationErrors::new();
        check_title(&self.title, &mut errors);
        if self.end < self.start {
            errors.push("end", "End date must be after start date");
        }
        errors.into_result()
    }

    /// Update-time checks. Only the title is re-validated; the span is not.
    pub fn validate_update(update: &UpdateAppointment) -> Result<()> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = &update.title {
            check_title(title, &mut errors);
        }
        errors.into_result()
    }

    /// Shallow-merges the set fields of `update` into this appointment.
    pub fn apply(&mut self, update: UpdateAppointment) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(start) = update.start {
            self.start = start;
        }
        if let Some(end) = update.end {
            self.end = end;
        }
        if let Some(resource_id) = update.resource_id {
            self.resource_id = resource_id;
        }
        if let Some(order) = update.order {
            self.order = order;
        }
        if let Some(details) = update.details {
            self.details = details;
        }
    }
}

fn check_title(title: &str, errors: &mut ValidationErrors) {
    let length = title.trim().chars().count();
    if length == 0 {
        errors.push("title", "Title is required");
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.push(
            "title",
            format!("Title must be at most {TITLE_MAX_CHARS} characters"),
        );
    }
}
