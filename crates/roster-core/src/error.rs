//! Error types for the roster library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single failed field check, carrying the message shown next to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field (`title`, `end`, ...)
    pub field: &'static str,
    /// User-facing message
    pub message: String,
}

/// Per-field validation failures collected for one create or update call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Returns true when no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All recorded failures in the order they were found.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The first message recorded for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Converts into `Ok(())` when empty, or a [`RosterError::Validation`].
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(RosterError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Comprehensive error type for all roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    /// One or more fields failed validation
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input that is not tied to a model field
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Date parsing or calendar arithmetic errors
    #[error("Date error: {source}")]
    Date {
        #[from]
        source: jiff::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> RosterError {
        RosterError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RosterError {
        RosterError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RosterError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// The validation failures, when this is a validation error.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            RosterError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RosterError::database(message).with_source(e))
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to RosterError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| RosterError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display_joins_fields() {
        let mut errors = ValidationErrors::new();
        errors.push("title", "Title is required");
        errors.push("end", "End date must be after start date");

        assert_eq!(
            errors.to_string(),
            "title: Title is required; end: End date must be after start date"
        );
        assert_eq!(errors.message_for("end"), Some("End date must be after start date"));
        assert_eq!(errors.message_for("start"), None);
    }

    #[test]
    fn test_empty_validation_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = RosterError::invalid_input("from").with_reason("not a datetime");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'from': not a datetime"
        );
    }
}
