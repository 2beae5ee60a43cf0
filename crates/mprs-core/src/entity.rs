//! The `Entity` trait: what the generic synchronizer needs to know about a kind.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::enums::EntityKind;
use crate::errors::CoreError;

/// A record type that lives in the store and is mirrored into the search index.
///
/// Implementors provide the id accessors, the merge rule for partial updates
/// (`apply_patch`) and field validation. Everything else (persistence, search,
/// propagation) is written once against this trait.
pub trait Entity:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Partial-update payload. Every field is optional; `None` leaves the
    /// current value untouched.
    type Patch: Clone + Debug + Default + Serialize + DeserializeOwned + Send + Sync;

    const KIND: EntityKind;

    /// Column holding the non-owning parent reference (`report_id`,
    /// `author_id`), if the kind has one.
    const PARENT_KEY: Option<&'static str> = None;

    /// Server-assigned id. `None` until the first store write.
    fn id(&self) -> Option<i64>;

    /// Return the entity carrying the id the store assigned on insert.
    #[must_use]
    fn with_id(self, id: i64) -> Self;

    /// Field-by-field merge: every `Some` in `patch` overwrites the
    /// corresponding field of `self`.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Reject values the store would refuse or that break field constraints.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending field.
    fn validate(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Copy `Some` patch fields onto the target.
///
/// `required` fields are plain `T` on the entity, `optional` fields are
/// `Option<T>`; on the patch both are `Option<T>`.
#[macro_export]
macro_rules! merge_patch {
    ($target:expr, $patch:expr; required: [$($req:ident),* $(,)?]; optional: [$($opt:ident),* $(,)?] $(;)?) => {{
        let patch = $patch;
        $(
            if let Some(value) = patch.$req {
                $target.$req = value;
            }
        )*
        $(
            if let Some(value) = patch.$opt {
                $target.$opt = Some(value);
            }
        )*
    }};
}
