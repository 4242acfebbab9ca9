//! Display implementations for domain models.

use std::fmt;

use super::datetime::ShortDateTime;
use crate::models::{Appointment, DetailValue, Details, Resource, ResourceType};

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailValue::Bool(value) => write!(f, "{value}"),
            DetailValue::Number(value) => write!(f, "{value}"),
            DetailValue::Text(value) => f.write_str(value),
        }
    }
}

fn write_details(f: &mut fmt::Formatter<'_>, details: &Details) -> fmt::Result {
    for (key, value) in details {
        writeln!(f, "  - {key}: {value}")?;
    }
    Ok(())
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}** ({}) `{}`", self.name, self.kind, self.id)?;
        write_details(f, &self.details)
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {} → {} `{}`",
            self.title,
            ShortDateTime(&self.start),
            ShortDateTime(&self.end),
            self.id
        )?;
        writeln!(f, "  - resource: `{}`", self.resource_id)?;
        if self.order != 0 {
            writeln!(f, "  - order: {}", self.order)?;
        }
        write_details(f, &self.details)
    }
}
