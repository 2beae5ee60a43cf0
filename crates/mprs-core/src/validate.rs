//! Field constraint checks shared by the entity `validate` implementations.

use crate::errors::CoreError;

/// Required text: non-blank and at most `max` characters.
///
/// # Errors
///
/// Returns `CoreError::Validation` when blank or too long.
pub fn required_text(field: &str, value: &str, max: Option<usize>) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::field(field, "must not be blank"));
    }
    if let Some(max) = max {
        max_len(field, Some(value), max)?;
    }
    Ok(())
}

/// Optional text of at most `max` characters.
///
/// # Errors
///
/// Returns `CoreError::Validation` when longer than `max`.
pub fn max_len(field: &str, value: Option<&str>, max: usize) -> Result<(), CoreError> {
    match value {
        Some(v) if v.chars().count() > max => Err(CoreError::field(
            field,
            format!("length {} exceeds {max}", v.chars().count()),
        )),
        _ => Ok(()),
    }
}

/// Optional single-character flag (`Y`/`N` style columns).
///
/// # Errors
///
/// Returns `CoreError::Validation` unless the value is exactly one character.
pub fn flag(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if v.chars().count() != 1 => {
            Err(CoreError::field(field, "must be exactly one character"))
        }
        _ => Ok(()),
    }
}
