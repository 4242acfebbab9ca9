//! Resource model definition.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use super::{Details, ResourceType};
use crate::params::{CreateResource, UpdateResource};

/// A schedulable entity: one row of the planner grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    /// Unique identifier
    pub id: Ulid,

    /// Display name
    pub name: String,

    /// Kind of resource
    #[serde(rename = "type")]
    pub kind: ResourceType,

    /// Open extension values (e.g. `avatar`)
    #[serde(default)]
    pub details: Details,
}

impl Resource {
    /// Creates a resource with a fresh id and no details.
    pub fn new(name: impl Into<String>, kind: ResourceType) -> Self {
        Self {
            id: Ulid::new(),
            name: name.into(),
            kind,
            details: Details::new(),
        }
    }

    /// Shallow-merges the set fields of `update` into this resource.
    pub fn apply(&mut self, update: UpdateResource) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(details) = update.details {
            self.details = details;
        }
    }
}

impl From<CreateResource> for Resource {
    fn from(params: CreateResource) -> Self {
        Self {
            id: Ulid::new(),
            name: params.name,
            kind: params.kind,
            details: params.details,
        }
    }
}
