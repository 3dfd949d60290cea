//! # Errors
//!
//! View operations are total; these errors only arise when building
//! patterns or loading configuration.

use thiserror::Error;

/// Result type for fallible construction
pub type ViewResult<T> = Result<T, ViewError>;

/// casualdb errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Pattern value was not a JSON object
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A value could not be converted to or from JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ViewError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ViewError::InvalidPattern(_) => "CASUAL_INVALID_PATTERN",
            ViewError::InvalidConfig(_) => "CASUAL_INVALID_CONFIG",
            ViewError::Serialization(_) => "CASUAL_SERIALIZATION",
        }
    }
}

impl From<serde_json::Error> for ViewError {
    fn from(e: serde_json::Error) -> Self {
        ViewError::Serialization(e.to_string())
    }
}
