//! Error types for the record manager.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the record model, configuration layer and interactive
//! shell can report.

use thiserror::Error;

/// The main error type for the record manager.
///
/// # Example
///
/// ```
/// use campus_records::error::RecordError;
///
/// let error = RecordError::InvalidArgument {
///     field: "grade".to_string(),
///     message: "Grade must be between 0 and 100.".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid argument 'grade': Grade must be between 0 and 100."
/// );
/// ```
#[derive(Debug, Error)]
pub enum RecordError {
    /// A constructor received a value outside its allowed range.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The field that was rejected.
        field: String,
        /// A user-facing description of the constraint.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The input stream ended while the shell was waiting for a value.
    #[error("Input stream closed")]
    InputClosed,

    /// Writing to or reading from the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The logging subscriber could not be installed.
    #[error("Failed to initialize logging: {message}")]
    LoggingInit {
        /// A description of the failure.
        message: String,
    },

    /// Records could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RecordError {
    /// Creates an [`RecordError::InvalidArgument`] for the given field.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the bare constraint message for argument errors.
    ///
    /// The shell prints this after an `Error: ` prefix when re-prompting.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidArgument { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// A type alias for Results that return RecordError.
pub type RecordResult<T> = Result<T, RecordError>;
