//! Error types for response validation and status translation

use thiserror::Error;

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised while checking a status API response
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A value had the wrong JSON type
    #[error("expected {expected}, got {found}")]
    UnexpectedType {
        /// Expected JSON type
        expected: &'static str,
        /// JSON type actually found
        found: &'static str,
    },

    /// A required key is absent from the response
    #[error("key \"{key}\" is missing from response {response}")]
    MissingKey {
        key: &'static str,
        /// Compact rendering of the offending response
        response: String,
    },

    /// The homework record could not be read
    #[error("malformed homework record: {0}")]
    MalformedRecord(String),

    /// The status code is not one of the known verdicts
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),
}

impl ValidationError {
    /// Check if this error means the API contract changed under us
    pub fn is_contract_change(&self) -> bool {
        matches!(self, Self::UnknownStatus(_))
    }
}
