//! Error types for media record validation.
//!
//! Records come from an external metadata source and are never trusted to be
//! complete. Anything a recipe needs but cannot find is reported here instead
//! of trapping at the point of use.

/// Common error type for popcorntv records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required field is missing or malformed.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl Error {
    /// Create a new InvalidRecord error.
    pub fn invalid_record<S: Into<String>>(msg: S) -> Self {
        Self::InvalidRecord(msg.into())
    }

    /// Create an InvalidRecord error for a missing field.
    pub fn missing_field(record: &str, field: &str) -> Self {
        Self::InvalidRecord(format!("{record} is missing {field}"))
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
