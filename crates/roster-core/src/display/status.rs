//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::store::Outcome;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Status for a mutation that looked up `what` by id.
    pub fn from_outcome(outcome: Outcome, what: &str) -> Self {
        match outcome {
            Outcome::Applied => Self::success(format!("{what} updated")),
            Outcome::NotFound => Self::failure(format!("{what} not found; nothing changed")),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}
