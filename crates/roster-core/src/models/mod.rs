//! Data models for resources and appointments.
//!
//! Resources are the rows of the scheduling grid (rooms, people, equipment)
//! and appointments are the bookings placed in its cells. Display
//! implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use roster_core::models::{Appointment, Resource, ResourceType};
//! use roster_core::params::CreateAppointment;
//!
//! let room = Resource::new("Room A", ResourceType::Room);
//! let standup = Appointment::new(CreateAppointment {
//!     title: "Standup".to_string(),
//!     start: date(2024, 1, 1).at(9, 0, 0, 0),
//!     end: date(2024, 1, 1).at(9, 15, 0, 0),
//!     resource_id: room.id,
//!     ..Default::default()
//! })?;
//! assert_eq!(standup.resource_id, room.id);
//! # Ok::<(), roster_core::RosterError>(())
//! ```

pub mod appointment;
pub mod details;
pub mod resource;
pub mod resource_type;


pub use appointment::{Appointment, TITLE_MAX_CHARS};
pub use details::{DetailValue, Details};
pub use resource::Resource;
pub use resource_type::ResourceType;
