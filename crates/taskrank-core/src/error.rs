//! Boundary error types.
//!
//! The scoring core has an empty error taxonomy: every malformed task field
//! is absorbed during normalization and nothing in the pipeline can
//! transiently fail. The only failure is a request payload that is not
//! parseable JSON, reported to the caller as a client-input error.

use thiserror::Error;

/// Error for unparseable request payloads.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// Payload is not valid JSON of an accepted shape
    #[error("Invalid task payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Result type alias for payload handling.
pub type Result<T, E = PayloadError> = std::result::Result<T, E>;
