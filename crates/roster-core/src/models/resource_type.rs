//! Resource kind enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of schedulable resource kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Room,
    Person,
    Equipment,
    Service,
    #[default]
    Other,
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "room" => Ok(ResourceType::Room),
            "person" => Ok(ResourceType::Person),
            "equipment" => Ok(ResourceType::Equipment),
            "service" => Ok(ResourceType::Service),
            "other" => Ok(ResourceType::Other),
            _ => Err(format!("Invalid resource type: {s}")),
        }
    }
}

impl ResourceType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Room => "room",
            ResourceType::Person => "person",
            ResourceType::Equipment => "equipment",
            ResourceType::Service => "service",
            ResourceType::Other => "other",
        }
    }
}
