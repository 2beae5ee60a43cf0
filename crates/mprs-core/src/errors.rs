//! Cross-cutting error types for MPRS.
//!
//! Storage-side errors (`DatabaseError`, `SyncError`) live in `mprs-db`.
//! Everything the core types themselves can reject is expressed here.

use thiserror::Error;

/// Errors raised by core types (validation, paging, parsing).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (required field, length, format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn field(field: &str, reason: impl std::fmt::Display) -> Self {
        Self::Validation(format!("{field}: {reason}"))
    }
}
