//! Markdown rendering of the placement grid.
//!
//! Terminal widths rule out one column per slot, so each resource becomes a
//! section listing only its occupied slots.

use std::fmt;

use super::datetime::ShortDateTime;
use crate::placement::Grid;

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# {} view: {} → {}",
            capitalized(self.mode.as_str()),
            ShortDateTime(&self.range.from),
            ShortDateTime(&self.range.to)
        )?;
        writeln!(f)?;
        writeln!(f, "Slots: {}", self.labels.join(" | "))?;

        if self.rows.is_empty() {
            writeln!(f)?;
            return writeln!(f, "No resources found.");
        }

        for row in &self.rows {
            writeln!(f)?;
            writeln!(f, "## {} ({})", row.resource.name, row.resource.kind)?;
            writeln!(f)?;
            if row.placed() == 0 {
                writeln!(f, "No appointments in this window.")?;
                continue;
            }
            for (label, cell) in self.labels.iter().zip(&row.cells) {
                for appointment in cell {
                    writeln!(
                        f,
                        "- {label}: **{}** {} → {} `{}`",
                        appointment.title,
                        ShortDateTime(&appointment.start),
                        ShortDateTime(&appointment.end),
                        appointment.id
                    )?;
                }
            }
        }
        Ok(())
    }
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::{
        models::{Appointment, Resource, ResourceType},
        params::CreateAppointment,
        placement::Grid,
        view::DateRange,
    };

    #[test]
    fn test_grid_lists_occupied_slots_per_resource() {
        let room = Resource::new("Room A", ResourceType::Room);
        let desk = Resource::new("Desk 4", ResourceType::Equipment);
        let review = Appointment::new(CreateAppointment {
            title: "Review".to_string(),
            start: date(2024, 1, 1).at(14, 0, 0, 0),
            end: date(2024, 1, 1).at(15, 0, 0, 0),
            resource_id: room.id,
            ..Default::default()
        })
        .unwrap();
        let range = DateRange::today(date(2024, 1, 1).at(0, 0, 0, 0));

        let output = Grid::build(&[room, desk], &[review], &range).to_string();

        assert!(output.starts_with("# Day view: 2024-01-01 00:00 → 2024-01-01 23:59"));
        assert!(output.contains("## Room A (room)"));
        assert!(output.contains("- 14:00: **Review** 2024-01-01 14:00 → 2024-01-01 15:00"));
        assert!(output.contains("## Desk 4 (equipment)\n\nNo appointments in this window."));
    }

    #[test]
    fn test_grid_without_resources() {
        let range = DateRange::today(date(2024, 1, 1).at(0, 0, 0, 0));
        let output = Grid::build(&[], &[], &range).to_string();
        assert!(output.ends_with("No resources found.\n"));
    }
}
