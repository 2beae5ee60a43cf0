//! Error types for mprs-db.

use mprs_core::enums::EntityKind;
use mprs_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (bad data in the database, unusable request).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors surfaced by the synchronizer and the boundary guards.
///
/// `Storage` means nothing was written to the index. `Index` on a write path
/// means the store change is committed and the index is behind until the next
/// successful write or a reindex.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Malformed input, rejected before any store write.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Misuse of the id at the boundary (`idexists`, `idnull`, `idinvalid`).
    #[error("Bad request: {0}")]
    BadRequest(&'static str),

    #[error("{kind} not found{}", describe_id(*.id))]
    NotFound { kind: EntityKind, id: Option<i64> },

    /// Store failure.
    #[error("Storage error: {0}")]
    Storage(#[source] DatabaseError),

    /// Search index failure.
    #[error("Index error: {0}")]
    Index(#[source] DatabaseError),
}

impl SyncError {
    #[must_use]
    pub const fn not_found(kind: EntityKind, id: i64) -> Self {
        Self::NotFound { kind, id: Some(id) }
    }

    /// Short machine-readable key, used by the CLI error output.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::BadRequest(key) => *key,
            Self::NotFound { .. } => "idnotfound",
            Self::Storage(_) => "storage",
            Self::Index(_) => "index",
        }
    }
}

fn describe_id(id: Option<i64>) -> String {
    id.map_or_else(|| " (no id)".to_string(), |id| format!(": id {id}"))
}

impl From<CoreError> for SyncError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::Other(e) => Self::Storage(DatabaseError::Other(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = SyncError::not_found(EntityKind::Bedroom, 42);
        assert_eq!(err.to_string(), "bedroom not found: id 42");
        let err = SyncError::NotFound {
            kind: EntityKind::Report,
            id: None,
        };
        assert_eq!(err.to_string(), "report not found (no id)");
        assert_eq!(err.key(), "idnotfound");
    }

    #[test]
    fn core_validation_maps_to_validation() {
        let err: SyncError = CoreError::Validation("acYn: too long".into()).into();
        assert!(matches!(err, SyncError::Validation(ref m) if m == "acYn: too long"));
    }

    #[test]
    fn bad_request_key_is_passed_through() {
        assert_eq!(SyncError::BadRequest("idexists").key(), "idexists");
    }
}
