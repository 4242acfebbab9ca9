//! Slot placement: which appointments render in which grid cell.
//!
//! [`belongs_in_slot`] is evaluated once per `(resource, slot)` cell per
//! render. An appointment is placed only in the slot holding its `start`;
//! durations never span several slots.

use ulid::Ulid;

use crate::{
    models::{Appointment, Resource},
    view::{
        calendar::{days_between, same_month, same_week, week_of_month, weekday_index},
        labels_for_view, month_index, DateRange, ViewMode,
    },
};

/// Decides whether `appointment` renders in slot `slot` under `mode`.
///
/// The range gate runs first: an appointment starting outside
/// `[range.from, range.to]` is never placed. Then, per mode:
///
/// - `Day`: the start hour equals `slot` and the start is on `range.from`'s
///   calendar day.
/// - `Week`: `weekday(start) - (6 - days_between(range.to, range.from))`
///   equals `slot` and the start is in `range.from`'s Sunday-started week.
///   The offset aligns ranges that end on a Saturday; ranges ending on other
///   weekdays shift accordingly.
/// - `Month`: the zero-based week of the month equals `slot` and the start is
///   in `range.from`'s calendar month.
/// - `Year`: the zero-based month equals `slot`.
pub fn belongs_in_slot(
    appointment: &Appointment,
    slot: usize,
    range: &DateRange,
    mode: ViewMode,
) -> bool {
    let start = appointment.start;
    if !range.contains(start) {
        return false;
    }
    let Ok(slot) = i64::try_from(slot) else {
        return false;
    };
    let anchor = range.from.date();

    match mode {
        ViewMode::Day => i64::from(start.hour()) == slot && start.date() == anchor,
        ViewMode::Week => {
            let column =
                weekday_index(start.date()) - (6 - days_between(range.to, range.from));
            column == slot && same_week(start.date(), anchor)
        }
        ViewMode::Month => {
            week_of_month(start.date()) == slot && same_month(start.date(), anchor)
        }
        ViewMode::Year => i64::try_from(month_index(start.date())).is_ok_and(|m| m == slot),
    }
}

/// Appointments of `resource_id` that render in `slot`, ascending by start.
/// Equal starts keep their list order.
pub fn cell_appointments<'a, I>(
    appointments: I,
    resource_id: Ulid,
    slot: usize,
    range: &DateRange,
    mode: ViewMode,
) -> Vec<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let mut cell: Vec<&Appointment> = appointments
        .into_iter()
        .filter(|a| a.resource_id == resource_id)
        .filter(|a| belongs_in_slot(a, slot, range, mode))
        .collect();
    cell.sort_by_key(|a| a.start);
    cell
}

/// One resource row of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub resource: Resource,
    /// One entry per slot label, each sorted ascending by start
    pub cells: Vec<Vec<Appointment>>,
}

impl GridRow {
    /// Number of appointments placed anywhere in this row.
    pub fn placed(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }
}

/// The full placement matrix for one date range: labels along one axis,
/// resources along the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub range: DateRange,
    pub mode: ViewMode,
    pub labels: Vec<String>,
    pub rows: Vec<GridRow>,
}

impl Grid {
    /// Places `appointments` for every resource over `range`. Appointments
    /// whose resource is not in `resources` are not shown.
    pub fn build(resources: &[Resource], appointments: &[Appointment], range: &DateRange) -> Self {
        let mode = range.mode();
        let labels = labels_for_view(mode, range);
        let rows = resources
            .iter()
            .map(|resource| GridRow {
                resource: resource.clone(),
                cells: (0..labels.len())
                    .map(|slot| {
                        cell_appointments(appointments, resource.id, slot, range, mode)
                            .into_iter()
                            .cloned()
                            .collect()
                    })
                    .collect(),
            })
            .collect();

        Self {
            range: *range,
            mode,
            labels,
            rows,
        }
    }

    /// The cell at (`resource_id`, `slot`), if both exist.
    pub fn cell(&self, resource_id: Ulid, slot: usize) -> Option<&[Appointment]> {
        self.rows
            .iter()
            .find(|row| row.resource.id == resource_id)
            .and_then(|row| row.cells.get(slot))
            .map(Vec::as_slice)
    }

    /// Total number of placed appointments.
    pub fn placed(&self) -> usize {
        self.rows.iter().map(GridRow::placed).sum()
    }
}
