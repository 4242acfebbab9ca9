//! Markdown formatting for models, collections and the placement grid.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation results use newtype wrappers so empty lists and
//! status lines format consistently wherever they are shown.
//!
//! ```rust
//! use roster_core::{
//!     display::{OperationStatus, Resources},
//!     models::{Resource, ResourceType},
//! };
//!
//! let output = Resources(vec![Resource::new("Room A", ResourceType::Room)]).to_string();
//! assert!(output.contains("Room A (room)"));
//!
//! assert_eq!(Resources(vec![]).to_string(), "No resources found.\n");
//! assert!(OperationStatus::success("Saved".to_string()).to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod grid;
pub mod models;
pub mod status;

pub use collections::{Appointments, Resources};
pub use datetime::ShortDateTime;
pub use status::OperationStatus;
