//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Appointment, Resource};

/// Newtype wrapper for displaying a resource list.
pub struct Resources(pub Vec<Resource>);

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No resources found.")
        } else {
            for resource in &self.0 {
                write!(f, "{resource}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying an appointment list, ascending by start.
pub struct Appointments(pub Vec<Appointment>);

impl Appointments {
    /// Wraps `appointments`, sorted by start (stable for equal starts).
    pub fn by_start(mut appointments: Vec<Appointment>) -> Self {
        appointments.sort_by_key(|a| a.start);
        Self(appointments)
    }
}

impl fmt::Display for Appointments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No appointments found.")
        } else {
            for appointment in &self.0 {
                write!(f, "{appointment}")?;
            }
            Ok(())
        }
    }
}
