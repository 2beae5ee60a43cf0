//! Id checks applied by callers before they reach the synchronizer.
//!
//! A transport (the CLI today) runs these guards so that misuse of ids is
//! reported as a bad request with a stable key instead of surfacing from
//! the store.

use mprs_core::entity::Entity;

use crate::error::SyncError;
use crate::index::Index;
use crate::store::Store;
use crate::sync::Synchronizer;

/// A new entity carried an id.
pub const ID_EXISTS: &str = "idexists";
/// An update or patch carried no id.
pub const ID_NULL: &str = "idnull";
/// The target id and the body id disagree.
pub const ID_INVALID: &str = "idinvalid";

/// Reject a create whose entity already has an id.
///
/// # Errors
///
/// `BadRequest("idexists")`.
pub fn check_new<E: Entity>(entity: &E) -> Result<(), SyncError> {
    match entity.id() {
        Some(_) => Err(SyncError::BadRequest(ID_EXISTS)),
        None => Ok(()),
    }
}

/// Check a body id against the id the caller addressed.
///
/// # Errors
///
/// `BadRequest("idnull")` when the body has no id, `BadRequest("idinvalid")`
/// when it differs from `target`.
pub fn check_target(target: i64, body_id: Option<i64>) -> Result<(), SyncError> {
    match body_id {
        None => Err(SyncError::BadRequest(ID_NULL)),
        Some(id) if id != target => Err(SyncError::BadRequest(ID_INVALID)),
        Some(_) => Ok(()),
    }
}

/// Guarded create.
///
/// # Errors
///
/// `BadRequest("idexists")`, then anything [`Synchronizer::create`] returns.
pub async fn create<E, S, I>(sync: &Synchronizer<E, S, I>, entity: E) -> Result<E, SyncError>
where
    E: Entity,
    S: Store<E>,
    I: Index<E>,
{
    check_new(&entity)?;
    sync.create(entity).await
}

/// Guarded full update of `target`.
///
/// # Errors
///
/// `BadRequest` for a missing or mismatched body id, `NotFound` when the
/// store has no such row, then anything [`Synchronizer::update`] returns.
pub async fn update<E, S, I>(
    sync: &Synchronizer<E, S, I>,
    target: i64,
    entity: E,
) -> Result<E, SyncError>
where
    E: Entity,
    S: Store<E>,
    I: Index<E>,
{
    check_target(target, entity.id())?;
    ensure_exists(sync, target).await?;
    sync.update(entity).await
}

/// Guarded partial update of `target`. `body_id` is the id carried in the
/// request body next to the patch fields.
///
/// # Errors
///
/// As [`update`], then anything [`Synchronizer::partial_update`] returns.
pub async fn patch<E, S, I>(
    sync: &Synchronizer<E, S, I>,
    target: i64,
    body_id: Option<i64>,
    patch: E::Patch,
) -> Result<E, SyncError>
where
    E: Entity,
    S: Store<E>,
    I: Index<E>,
{
    check_target(target, body_id)?;
    ensure_exists(sync, target).await?;
    sync.partial_update(target, patch).await
}

async fn ensure_exists<E, S, I>(sync: &Synchronizer<E, S, I>, id: i64) -> Result<(), SyncError>
where
    E: Entity,
    S: Store<E>,
    I: Index<E>,
{
    if sync.exists(id).await? {
        Ok(())
    } else {
        Err(SyncError::not_found(E::KIND, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{bedroom, test_service};
    use mprs_core::enums::QualityStateType;
    use mprs_core::patches::BedroomPatch;
    use rstest::rstest;

    #[rstest]
    #[case(None, Some(ID_NULL))]
    #[case(Some(4), Some(ID_INVALID))]
    #[case(Some(3), None)]
    fn target_checks(#[case] body_id: Option<i64>, #[case] expected: Option<&str>) {
        let result = check_target(3, body_id);
        match expected {
            None => assert!(result.is_ok()),
            Some(key) => {
                assert!(matches!(result, Err(SyncError::BadRequest(k)) if k == key));
            }
        }
    }

    #[tokio::test]
    async fn create_with_id_is_rejected_before_store() {
        let svc = test_service().await;
        let err = create(
            svc.bedrooms(),
            bedroom(1, "A", QualityStateType::High).with_id(7),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SyncError::BadRequest(ID_EXISTS)));
        assert_eq!(svc.bedrooms().count_store().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let svc = test_service().await;
        let err = update(
            svc.bedrooms(),
            9,
            bedroom(1, "A", QualityStateType::High).with_id(9),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SyncError::NotFound { id: Some(9), .. }));
    }

    #[tokio::test]
    async fn guarded_patch_reaches_synchronizer() {
        let svc = test_service().await;
        let created = create(svc.bedrooms(), bedroom(1, "A", QualityStateType::High))
            .await
            .unwrap();
        let id = created.id.unwrap();

        let patched = patch(
            svc.bedrooms(),
            id,
            Some(id),
            BedroomPatch {
                condition_level: Some(QualityStateType::Middle),
                ..BedroomPatch::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(patched.condition_level, QualityStateType::Middle);

        let err = patch(svc.bedrooms(), id, None, BedroomPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::BadRequest(ID_NULL)));
    }
}
