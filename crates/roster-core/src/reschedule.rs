//! Drag-and-drop rescheduling.
//!
//! A drag is a sequence of [`DragEvent`]s. Only the terminal
//! [`DragEvent::Drop`] changes data: its payload names the dragged
//! appointment and its source cell plus the destination cell, and
//! [`compute_new_dates`] turns the slot movement into a new time span.

use jiff::{
    civil::{Date, DateTime},
    ToSpan,
};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::{
    error::{Result, RosterError},
    view::ViewMode,
};

/// Where a drag started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSource {
    pub appointment_id: Ulid,
    pub resource_id: Ulid,
    pub slot: usize,
}

/// A grid cell a drag hovers over or ends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    pub resource_id: Ulid,
    pub slot: usize,
}

/// Discrete drag-and-drop events emitted by the pointer layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragEvent {
    Start(DragSource),
    Enter(DropTarget),
    Leave(DropTarget),
    Drop { source: DragSource, target: DropTarget },
}

/// A rescheduled time span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDates {
    pub start: DateTime,
    pub end: DateTime,
}

/// Computes the span of an appointment moved from slot `source` to slot
/// `destination`, given its current `start` and `end`.
///
/// Moving to a later slot moves the appointment forward in time. Day views
/// shift by hours, week views by days and month views by weeks, so the
/// duration is preserved. Year views instead set the month to
/// `destination` (zero-based, day clamped to the month's length) and reset
/// the span to exactly one month.
///
/// # Errors
///
/// Returns [`RosterError::InvalidInput`] for a year-view destination past
/// December, and [`RosterError::Date`] if the result leaves the supported
/// calendar range.
pub fn compute_new_dates(
    mode: ViewMode,
    destination: usize,
    source: usize,
    start: DateTime,
    end: DateTime,
) -> Result<NewDates> {
    let delta = slot_number(source)? - slot_number(destination)?;
    let shift = -delta;

    let (start, end) = match mode {
        ViewMode::Day => (start.checked_add(shift.hours())?, end.checked_add(shift.hours())?),
        ViewMode::Week => (start.checked_add(shift.days())?, end.checked_add(shift.days())?),
        ViewMode::Month => (
            start.checked_add(shift.weeks())?,
            end.checked_add(shift.weeks())?,
        ),
        ViewMode::Year => {
            let start = with_month(start, destination)?;
            (start, start.checked_add(1.month())?)
        }
    };
    Ok(NewDates { start, end })
}

fn slot_number(slot: usize) -> Result<i64> {
    i64::try_from(slot).map_err(|_| {
        RosterError::invalid_input("slot").with_reason(format!("slot index {slot} is too large"))
    })
}

/// `datetime` moved to zero-based month `month` of the same year, keeping the
/// time of day and clamping the day to the month's length.
fn with_month(datetime: DateTime, month: usize) -> Result<DateTime> {
    let month = i8::try_from(month + 1)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| {
            RosterError::invalid_input("slot")
                .with_reason(format!("year view has no slot {month}"))
        })?;
    let date = datetime.date();
    let first = Date::new(date.year(), month, 1)?;
    let day = date.day().min(first.days_in_month());
    Ok(Date::new(date.year(), month, day)?.to_datetime(datetime.time()))
}
