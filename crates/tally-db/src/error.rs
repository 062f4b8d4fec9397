//! Database error types for tally-db.

use tally_core::errors::CoreError;
use thiserror::Error;

/// The four outcomes callers distinguish when an operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown upload or tree node.
    NotFound,
    /// Empty update content, non-positive limit, undecodable interval type, ...
    InvalidArgument,
    /// Refused by the permission collaborator.
    PermissionDenied,
    /// The store is unavailable or a transaction aborted.
    StorageFailure,
}

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A referenced row does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A caller-supplied value was rejected before touching the store.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The permission check refused the actor.
    #[error("Permission denied: user {actor_id} may not {action} upload {upload_id}")]
    PermissionDenied {
        actor_id: i64,
        upload_id: i64,
        action: &'static str,
    },

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Domain validation or decoding failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::Core(CoreError::Other(_)) => ErrorKind::StorageFailure,
            Self::Core(_) => ErrorKind::InvalidArgument,
            Self::Query(_)
            | Self::Migration(_)
            | Self::NoResult
            | Self::LibSql(_)
            | Self::Other(_) => ErrorKind::StorageFailure,
        }
    }

    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
