//! Comprehensive error handling for credential record operations

use thiserror::Error;

/// Derivation and verification errors
#[derive(Debug, Error)]
pub enum KdfError {
    /// Secret, record, or candidate input was empty
    #[error("secret or record cannot be empty")]
    EmptyInput,

    /// Record bytes do not decode to a valid parameter set
    #[error("malformed derivation record: {0}")]
    MalformedRecord(String),

    /// Derivation succeeded but the computed key differs from the stored key
    #[error("derived key does not match stored record")]
    Mismatch,

    /// Builder was finalized with an unusable parameter
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The secure random source could not produce the requested bytes
    #[error("random generation failed: {0}")]
    RandomGeneration(String),

    /// Internal error occurred
    #[error("internal error: {0}")]
    Internal(String),
}

impl KdfError {
    /// Create a `malformed_record` error
    pub fn malformed_record(msg: impl Into<String>) -> Self {
        Self::MalformedRecord(msg.into())
    }

    /// Create an `invalid_parameters` error
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type for credential record operations
pub type Result<T> = std::result::Result<T, KdfError>;
