//! Core library for the Roster resource scheduling planner.
//!
//! Resources (rooms, people, equipment) form the rows of a scheduling grid
//! and the selected date range forms its columns. This crate owns the pieces
//! that decide what that grid shows and how it changes:
//!
//! - [`store`]: observable in-memory resource and appointment stores
//! - [`view`]: view-mode derivation, slot labels and window navigation
//! - [`placement`]: which appointments render in which cell
//! - [`reschedule`]: turning a drag-and-drop move into a new time span
//! - [`planner`]: the session object tying the above together
//! - [`db`] and [`repository`]: SQLite snapshots for the CLI
//! - [`display`]: markdown output for terminals
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use roster_core::{
//!     models::{Appointment, Resource, ResourceType},
//!     params::CreateAppointment,
//!     view::DateRange,
//!     Planner,
//! };
//!
//! let mut planner = Planner::new(DateRange::today(date(2024, 1, 1).at(0, 0, 0, 0)));
//! let room = Resource::new("Room A", ResourceType::Room);
//! planner.resources_mut().create(room.clone())?;
//! planner.appointments_mut().create(Appointment::new(CreateAppointment {
//!     title: "Planning".to_string(),
//!     start: date(2024, 1, 1).at(14, 0, 0, 0),
//!     end: date(2024, 1, 1).at(15, 0, 0, 0),
//!     resource_id: room.id,
//!     ..Default::default()
//! })?)?;
//!
//! let grid = planner.grid();
//! assert_eq!(grid.labels[14], "14:00");
//! assert_eq!(grid.cell(room.id, 14).map(<[_]>::len), Some(1));
//! # Ok::<(), roster_core::RosterError>(())
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod placement;
pub mod planner;
pub mod repository;
pub mod reschedule;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use error::{Result, RosterError, ValidationErrors};
pub use models::{Appointment, DetailValue, Details, Resource, ResourceType};
pub use placement::{belongs_in_slot, Grid};
pub use planner::{Planner, Snapshot};
pub use repository::{Repository, RepositoryBuilder};
pub use reschedule::{compute_new_dates, DragEvent, DragSource, DropTarget, NewDates};
pub use store::{AppointmentStore, Outcome, ResourceStore, StoreEvent};
pub use view::{labels_for_view, DateRange, ViewMode};
