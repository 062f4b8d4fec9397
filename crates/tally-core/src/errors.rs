//! Cross-cutting error types for Tally.
//!
//! Storage errors (`DatabaseError`) live in `tally-db`, configuration errors in
//! `tally-config`. Everything converges into `anyhow::Error` in `tally-cli`.

use thiserror::Error;

/// Errors raised by domain validation and decoding.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (empty content, zero limit, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A raw highlight type code outside the known vocabulary.
    #[error("Unknown highlight type code: {0:?}")]
    UnknownHighlightCode(String),

    /// A bucket row identity could not be parsed.
    #[error("Invalid bucket reference '{input}': {reason}")]
    InvalidBucketRef { input: String, reason: String },

    /// An annotation kind name that is not part of the vocabulary.
    #[error("Unknown annotation kind: {0}")]
    UnknownKind(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
