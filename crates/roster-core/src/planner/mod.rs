//! The planner session: both stores, the selected window and the drag state.
//!
//! One [`Planner`] is created per session and handed to every consumer by
//! reference. It is the single writer of its stores.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Drag events /  │    │     Planner     │    │ Resource- and   │
//! │  CLI commands   │───▶│  (placement,    │───▶│ AppointmentStore│
//! │                 │    │   reschedule)   │    │  + subscribers  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use jiff::civil::date;
//! use roster_core::{
//!     models::{Appointment, Resource, ResourceType},
//!     params::CreateAppointment,
//!     reschedule::{DragEvent, DragSource, DropTarget},
//!     view::DateRange,
//!     Planner,
//! };
//!
//! let mut planner = Planner::new(DateRange::today(date(2024, 1, 1).at(0, 0, 0, 0)));
//! let room = Resource::new("Room A", ResourceType::Room);
//! planner.resources_mut().create(room.clone())?;
//! let standup = Appointment::new(CreateAppointment {
//!     title: "Standup".to_string(),
//!     start: date(2024, 1, 1).at(9, 0, 0, 0),
//!     end: date(2024, 1, 1).at(9, 15, 0, 0),
//!     resource_id: room.id,
//!     ..Default::default()
//! })?;
//! planner.appointments_mut().create(standup.clone())?;
//!
//! let source = DragSource { appointment_id: standup.id, resource_id: room.id, slot: 9 };
//! let target = DropTarget { resource_id: room.id, slot: 11 };
//! planner.handle_drag(DragEvent::Drop { source, target })?;
//!
//! let grid = planner.grid();
//! assert_eq!(grid.cell(room.id, 11).map(<[_]>::len), Some(1));
//! # Ok::<(), roster_core::RosterError>(())
//! ```

use log::{debug, info};

use crate::{
    error::Result,
    models::{Appointment, Resource},
    params::UpdateAppointment,
    placement::Grid,
    reschedule::{compute_new_dates, DragEvent, DragSource, DropTarget},
    store::{AppointmentStore, Outcome, ResourceStore},
    view::{labels_for_view, DateRange, ViewMode},
};

#[cfg(test)]
mod tests;

/// A loaded or saved copy of both stores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub resources: Vec<Resource>,
    pub appointments: Vec<Appointment>,
}

/// Main planner interface tying the stores to the view window.
#[derive(Debug)]
pub struct Planner {
    resources: ResourceStore,
    appointments: AppointmentStore,
    range: DateRange,
    dragging: Option<DragSource>,
    hovered: Option<DropTarget>,
}

impl Planner {
    /// Creates an empty planner showing `range`.
    pub fn new(range: DateRange) -> Self {
        Self::from_snapshot(Snapshot::default(), range)
    }

    /// Creates a planner seeded from `snapshot`.
    pub fn from_snapshot(snapshot: Snapshot, range: DateRange) -> Self {
        Self {
            resources: ResourceStore::from_items(snapshot.resources),
            appointments: AppointmentStore::from_items(snapshot.appointments),
            range,
            dragging: None,
            hovered: None,
        }
    }

    /// Copies both stores for persistence.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            resources: self.resources.list(),
            appointments: self.appointments.list(),
        }
    }

    pub fn resources(&self) -> &ResourceStore {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut ResourceStore {
        &mut self.resources
    }

    pub fn appointments(&self) -> &AppointmentStore {
        &self.appointments
    }

    pub fn appointments_mut(&mut self) -> &mut AppointmentStore {
        &mut self.appointments
    }

    /// The selected window.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Selects a new window. Labels and the grid follow on the next read.
    pub fn set_range(&mut self, range: DateRange) {
        debug!("View window set to {} .. {}", range.from, range.to);
        self.range = range;
    }

    /// Pages the window one view-mode step back.
    pub fn previous_window(&mut self) -> Result<DateRange> {
        let range = self.range.previous()?;
        self.set_range(range);
        Ok(range)
    }

    /// Pages the window one view-mode step forward.
    pub fn next_window(&mut self) -> Result<DateRange> {
        let range = self.range.next()?;
        self.set_range(range);
        Ok(range)
    }

    pub fn mode(&self) -> ViewMode {
        self.range.mode()
    }

    /// Slot labels for the current window.
    pub fn labels(&self) -> Vec<String> {
        labels_for_view(self.mode(), &self.range)
    }

    /// The placement grid for the current window.
    pub fn grid(&self) -> Grid {
        Grid::build(
            self.resources.as_slice(),
            self.appointments.as_slice(),
            &self.range,
        )
    }

    /// The drag in progress, if any.
    pub fn dragging(&self) -> Option<DragSource> {
        self.dragging
    }

    /// The cell currently highlighted by a drag, if any.
    pub fn hovered(&self) -> Option<DropTarget> {
        self.hovered
    }

    /// Consumes one drag-and-drop event. Hover events only move the
    /// highlight; a drop reschedules through [`Planner::move_appointment`].
    pub fn handle_drag(&mut self, event: DragEvent) -> Result<Outcome> {
        match event {
            DragEvent::Start(source) => {
                self.dragging = Some(source);
                self.hovered = None;
                Ok(Outcome::Applied)
            }
            DragEvent::Enter(target) => {
                self.hovered = Some(target);
                Ok(Outcome::Applied)
            }
            DragEvent::Leave(target) => {
                if self.hovered == Some(target) {
                    self.hovered = None;
                }
                Ok(Outcome::Applied)
            }
            DragEvent::Drop { source, target } => {
                self.dragging = None;
                self.hovered = None;
                self.move_appointment(source, target)
            }
        }
    }

    /// Moves an appointment to `target` within the current window: new span
    /// from the slot movement, new resource from the target row. Abandoned
    /// with [`Outcome::NotFound`] and no mutation when the appointment or
    /// the destination resource does not exist.
    ///
    /// # Errors
    ///
    /// Propagates date arithmetic failures from the span computation.
    pub fn move_appointment(&mut self, source: DragSource, target: DropTarget) -> Result<Outcome> {
        if !self.resources.contains(target.resource_id) {
            debug!("Drop on unknown resource {} abandoned", target.resource_id);
            return Ok(Outcome::NotFound);
        }
        let Some(appointment) = self.appointments.get(source.appointment_id) else {
            debug!("Drop of unknown appointment {} abandoned", source.appointment_id);
            return Ok(Outcome::NotFound);
        };

        let dates = compute_new_dates(
            self.mode(),
            target.slot,
            source.slot,
            appointment.start,
            appointment.end,
        )?;
        info!(
            "Moving appointment {} from slot {} to slot {} on resource {}",
            appointment.id, source.slot, target.slot, target.resource_id
        );

        let mut update = UpdateAppointment::new(appointment.id);
        update.start = Some(dates.start);
        update.end = Some(dates.end);
        update.resource_id = Some(target.resource_id);
        self.appointments.update(update)
    }
}
