//! Error types for the raster library.

use thiserror::Error;

/// Main error type for raster operations.
#[derive(Debug, Error)]
pub enum RasterError {
    /// A value falls outside the domain declared by an attribute or coordinate.
    #[error("Invalid value for {kind}: '{value}'{}", .position.map(|p| format!(" at position {p}")).unwrap_or_default())]
    Validation {
        kind: String,
        value: String,
        position: Option<usize>,
    },

    /// An entity identifier does not match the expected structured pattern.
    #[error("Invalid {kind} identifier: '{id}'")]
    Format { kind: String, id: String },

    /// A builder was finalized before a required role was added.
    #[error("Missing component '{0}'")]
    MissingComponent(String),

    /// A requested name, index, or label is absent from the declared vocabulary.
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// An invalid combination of mutually dependent parameters.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Checkpoint persistence failure.
    #[error("Checkpoint error: {0}")]
    Checkpoint(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RasterError {
    /// Validation error for a scalar value.
    pub fn invalid_value(kind: &str, value: impl std::fmt::Display) -> Self {
        RasterError::Validation {
            kind: kind.to_string(),
            value: value.to_string(),
            position: None,
        }
    }

    /// Validation error citing the offending element's position in an array.
    pub fn invalid_element(kind: &str, value: impl std::fmt::Display, position: usize) -> Self {
        RasterError::Validation {
            kind: kind.to_string(),
            value: value.to_string(),
            position: Some(position),
        }
    }
}

/// Result type alias for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;
