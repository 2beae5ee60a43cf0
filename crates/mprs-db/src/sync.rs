//! Store-then-index write protocol, generic over the entity kind.
//!
//! Every mutation writes the store first and, only once that succeeded,
//! the index. The two writes are awaited in sequence and never share a
//! transaction. A failed index write is surfaced as `SyncError::Index`; the
//! store change stays committed and is not retried or rolled back.

use std::marker::PhantomData;

use mprs_core::entity::Entity;
use mprs_core::paging::{Page, PageSpec};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{DatabaseError, SyncError};
use crate::index::{FtsIndex, Index};
use crate::store::{SqlStore, Store};

/// Rows copied per store page during a reindex.
const REINDEX_BATCH: u32 = 500;

/// Where a given id currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    /// Neither store nor index has the id.
    Absent,
    /// In the store; the index is missing it or holds an older version.
    StoreOnly,
    /// Store and index agree.
    Synced,
    /// Only the index has it: a delete whose index half failed.
    IndexOnly,
}

/// The production synchronizer for one kind.
pub type EntitySync<E> = Synchronizer<E, SqlStore<E>, FtsIndex<E>>;

/// Composes a store and an index for one entity kind.
pub struct Synchronizer<E, S, I> {
    store: S,
    index: I,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S, I> Synchronizer<E, S, I>
where
    E: Entity,
    S: Store<E>,
    I: Index<E>,
{
    pub const fn new(store: S, index: I) -> Self {
        Self {
            store,
            index,
            _entity: PhantomData,
        }
    }

    /// Validate, insert into the store, then index the saved entity.
    ///
    /// Returns the store's version (with the assigned id). Rejecting a
    /// caller-supplied id is the boundary's job; an entity that already
    /// carries one is saved as a replacement.
    ///
    /// # Errors
    ///
    /// `Validation` before any write, `Storage` if the store write fails,
    /// `Index` if the store write succeeded but the index write did not.
    pub async fn create(&self, entity: E) -> Result<E, SyncError> {
        debug!(kind = %E::KIND, entity = ?entity, "Request to save {}", E::KIND);
        entity.validate()?;
        let saved = self.save(entity).await?;
        self.propagate(&saved).await?;
        Ok(saved)
    }

    /// Full replacement: every field of the stored row takes the new value,
    /// including optional fields the caller left out.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing id or a row that does not exist, otherwise as
    /// [`Self::create`].
    pub async fn update(&self, entity: E) -> Result<E, SyncError> {
        debug!(kind = %E::KIND, entity = ?entity, "Request to update {}", E::KIND);
        if entity.id().is_none() {
            return Err(SyncError::NotFound {
                kind: E::KIND,
                id: None,
            });
        }
        entity.validate()?;
        let saved = self.save(entity).await?;
        self.propagate(&saved).await?;
        Ok(saved)
    }

    /// Merge `patch` into the stored entity and write the result.
    ///
    /// The read-merge-write sequence holds no lock: two concurrent partial
    /// updates of one id may lose one of the changes.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is not in the store, otherwise as [`Self::create`].
    pub async fn partial_update(&self, id: i64, patch: E::Patch) -> Result<E, SyncError> {
        debug!(kind = %E::KIND, id, patch = ?patch, "Request to partially update {}", E::KIND);
        let mut current = self
            .store
            .find_by_id(id)
            .await
            .map_err(SyncError::Storage)?
            .ok_or_else(|| SyncError::not_found(E::KIND, id))?;

        current.apply_patch(patch);
        current.validate()?;

        let saved = self.save(current).await?;
        self.propagate(&saved).await?;
        Ok(saved)
    }

    /// Delete from the store, then from the index. Deleting a missing id
    /// succeeds.
    ///
    /// # Errors
    ///
    /// `Storage` if the store delete fails (the index is left alone),
    /// `Index` if only the index delete failed.
    pub async fn delete(&self, id: i64) -> Result<(), SyncError> {
        debug!(kind = %E::KIND, id, "Request to delete {}", E::KIND);
        self.store
            .delete_by_id(id)
            .await
            .map_err(SyncError::Storage)?;
        self.index.delete_by_id(id).await.map_err(|e| {
            warn!(kind = %E::KIND, id, error = %e, "index delete failed, document left behind");
            SyncError::Index(e)
        })
    }

    /// Full-text search. Reads the index only.
    ///
    /// # Errors
    ///
    /// `Index` for malformed queries or an unavailable index.
    pub async fn search(&self, query: &str, spec: &PageSpec) -> Result<Page<E>, SyncError> {
        debug!(kind = %E::KIND, query, page = spec.page, "Request to search for a page of {}", E::KIND);
        self.index
            .search(query, spec)
            .await
            .map_err(SyncError::Index)
    }

    /// One page of the store.
    ///
    /// # Errors
    ///
    /// `Storage` on store failure or an unknown sort property.
    pub async fn list_all(&self, spec: &PageSpec) -> Result<Page<E>, SyncError> {
        debug!(kind = %E::KIND, page = spec.page, size = spec.size, "Request to get all {}", E::KIND);
        self.store
            .find_all_paged(spec)
            .await
            .map_err(SyncError::Storage)
    }

    /// # Errors
    ///
    /// `Storage` on store failure.
    pub async fn find_one(&self, id: i64) -> Result<Option<E>, SyncError> {
        debug!(kind = %E::KIND, id, "Request to get {}", E::KIND);
        self.store.find_by_id(id).await.map_err(SyncError::Storage)
    }

    /// # Errors
    ///
    /// `Storage` on store failure.
    pub async fn exists(&self, id: i64) -> Result<bool, SyncError> {
        self.store
            .exists_by_id(id)
            .await
            .map_err(SyncError::Storage)
    }

    /// Store records whose parent reference equals `parent_id`.
    ///
    /// # Errors
    ///
    /// `Validation` for kinds without a parent reference, `Storage` on
    /// store failure.
    pub async fn find_by_parent(
        &self,
        parent_id: i64,
        spec: &PageSpec,
    ) -> Result<Page<E>, SyncError> {
        let Some(parent_key) = E::PARENT_KEY else {
            return Err(SyncError::Validation(format!(
                "{} has no parent reference",
                E::KIND
            )));
        };
        debug!(kind = %E::KIND, parent_key, parent_id, "Request to get {} by parent", E::KIND);
        self.store
            .find_by_parent(parent_id, spec)
            .await
            .map_err(SyncError::Storage)
    }

    /// # Errors
    ///
    /// `Storage` on store failure.
    pub async fn count_store(&self) -> Result<u64, SyncError> {
        self.store.count().await.map_err(SyncError::Storage)
    }

    /// # Errors
    ///
    /// `Index` on index failure.
    pub async fn count_index(&self) -> Result<u64, SyncError> {
        self.index.count().await.map_err(SyncError::Index)
    }

    /// Compare the store and index copies of `id`.
    ///
    /// # Errors
    ///
    /// `Storage` or `Index` if either side cannot be read.
    pub async fn sync_state(&self, id: i64) -> Result<SyncState, SyncError> {
        let stored = self
            .store
            .find_by_id(id)
            .await
            .map_err(SyncError::Storage)?;
        let indexed = self.index.get(id).await.map_err(SyncError::Index)?;
        Ok(match (stored, indexed) {
            (None, None) => SyncState::Absent,
            (None, Some(_)) => SyncState::IndexOnly,
            (Some(s), Some(i)) if s == i => SyncState::Synced,
            (Some(_), _) => SyncState::StoreOnly,
        })
    }

    /// Rebuild this kind's index from the store. Returns the number of
    /// documents written.
    ///
    /// # Errors
    ///
    /// `Storage` if a store page cannot be read, `Index` if the index cannot
    /// be cleared or written. A failure midway leaves a partial index; run
    /// the reindex again.
    pub async fn reindex(&self) -> Result<u64, SyncError> {
        info!(kind = %E::KIND, "reindexing from store");
        self.index.clear().await.map_err(SyncError::Index)?;

        let mut written = 0u64;
        let mut spec = PageSpec::new(0, REINDEX_BATCH);
        loop {
            let page = self
                .store
                .find_all_paged(&spec)
                .await
                .map_err(SyncError::Storage)?;
            if page.items.is_empty() {
                break;
            }
            for entity in &page.items {
                self.index.put(entity).await.map_err(SyncError::Index)?;
                written += 1;
            }
            if !page.has_next() {
                break;
            }
            spec.page += 1;
        }

        info!(kind = %E::KIND, written, "reindex complete");
        Ok(written)
    }

    async fn save(&self, entity: E) -> Result<E, SyncError> {
        let id = entity.id();
        self.store.save(entity).await.map_err(|e| match (e, id) {
            (DatabaseError::NoResult, Some(id)) => SyncError::not_found(E::KIND, id),
            (e, _) => SyncError::Storage(e),
        })
    }

    async fn propagate(&self, saved: &E) -> Result<(), SyncError> {
        self.index.put(saved).await.map_err(|e| {
            warn!(
                kind = %E::KIND,
                id = ?saved.id(),
                error = %e,
                "index write failed, store change kept"
            );
            SyncError::Index(e)
        })
    }
}
