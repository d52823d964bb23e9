//! Error types for progress update decoding.
//!
//! Update errors are never shown to the user: the panel drops the offending
//! chunk and keeps its previous state. They exist so callers can log or test
//! why a chunk was dropped.

use thiserror::Error;

/// Reasons an input chunk was not merged.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// The chunk is not a single JSON document.
    #[error("Update is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The chunk is valid JSON but not an object, so it has no keys to merge.
    #[error("Update must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}

/// Type alias for Result with UpdateError.
pub type UpdateResult<T> = Result<T, UpdateError>;
