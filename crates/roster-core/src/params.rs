//! Parameter structures for roster operations.
//!
//! These structures are shared by every interface (the CLI today, any other
//! front end later) and stay free of framework-specific derives. Interface
//! layers define their own argument types and convert into these with
//! `From` implementations:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │     Stores      │
//! │  (clap derives) │───▶│ (this module)   │───▶│  & Planner      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Update parameters double as the shallow-merge patches applied by the
//! stores: every `Some` field overwrites the stored value, `None` leaves it
//! alone. `details` is replaced wholesale, never merged key by key.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::models::{Details, ResourceType};

/// Parameters for creating a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateResource {
    /// Display name
    pub name: String,
    /// Kind of resource
    #[serde(default, rename = "type")]
    pub kind: ResourceType,
    /// Extension values (avatar, colour, ...)
    #[serde(default)]
    pub details: Details,
}

/// Partial update for a resource, located by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResource {
    /// Resource to update
    pub id: Ulid,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ResourceType>,
    pub details: Option<Details>,
}

impl UpdateResource {
    /// An update for `id` that changes nothing until fields are set.
    pub fn new(id: Ulid) -> Self {
        Self {
            id,
            name: None,
            kind: None,
            details: None,
        }
    }
}

/// Parameters for creating an appointment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointment {
    /// Title, 1 to 50 characters
    pub title: String,
    /// Start of the booking
    pub start: DateTime,
    /// End of the booking, not before `start`
    pub end: DateTime,
    /// Resource the booking belongs to
    pub resource_id: Ulid,
    /// Tie-breaker within a cell
    #[serde(default)]
    pub order: i32,
    /// Extension values
    #[serde(default)]
    pub details: Details,
}

/// Partial update for an appointment, located by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAppointment {
    /// Appointment to update
    pub id: Ulid,
    pub title: Option<String>,
    pub start: Option<DateTime>,
    pub end: Option<DateTime>,
    pub resource_id: Option<Ulid>,
    pub order: Option<i32>,
    pub details: Option<Details>,
}

impl UpdateAppointment {
    /// An update for `id` that changes nothing until fields are set.
    pub fn new(id: Ulid) -> Self {
        Self {
            id,
            title: None,
            start: None,
            end: None,
            resource_id: None,
            order: None,
            details: None,
        }
    }
}
