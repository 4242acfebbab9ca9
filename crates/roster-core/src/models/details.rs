//! Open key-value extension bag shared by resources and appointments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Extension map attached to resources and appointments (avatar URL, notes,
/// colour, ...). Keys are ordered so output and persistence are stable.
pub type Details = BTreeMap<String, DetailValue>;

/// A single value in a [`Details`] bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl DetailValue {
    /// Interprets free-form input: `true`/`false` become booleans, numbers
    /// that print back exactly as typed become numbers, the rest stays text.
    /// `02139` or `1e3` therefore stay text instead of losing their spelling.
    pub fn from_input(raw: &str) -> Self {
        match raw {
            "true" => DetailValue::Bool(true),
            "false" => DetailValue::Bool(false),
            _ => raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && n.to_string() == raw)
                .map_or_else(|| DetailValue::Text(raw.to_string()), DetailValue::Number),
        }
    }
}

impl From<&str> for DetailValue {
    fn from(value: &str) -> Self {
        DetailValue::Text(value.to_string())
    }
}

impl From<String> for DetailValue {
    fn from(value: String) -> Self {
        DetailValue::Text(value)
    }
}

impl From<f64> for DetailValue {
    fn from(value: f64) -> Self {
        DetailValue::Number(value)
    }
}

impl From<bool> for DetailValue {
    fn from(value: bool) -> Self {
        DetailValue::Bool(value)
    }
}
