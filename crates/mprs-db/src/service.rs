//! Service layer owning both databases and one synchronizer per kind.
//!
//! `ReportService` wraps the store `MprsDb` and the index `MprsDb`. Every
//! synchronizer shares the two connections; callers pick one through the
//! named accessors or generically with [`ReportService::sync`].

use mprs_config::MprsConfig;
use mprs_core::entities::{
    Author, Bathroom, Bedroom, Entrance, EnvFactor, Infrastructure, Kitchen, LivingRoom, Report,
};
use mprs_core::entity::Entity;
use mprs_core::enums::EntityKind;
use serde::Serialize;

use crate::MprsDb;
use crate::error::{DatabaseError, SyncError};
use crate::index::FtsIndex;
use crate::records::Record;
use crate::store::SqlStore;
use crate::sync::{EntitySync, Synchronizer};

/// Store and index document counts for one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub kind: EntityKind,
    pub store: u64,
    pub index: u64,
}

impl KindCounts {
    #[must_use]
    pub const fn in_sync(&self) -> bool {
        self.store == self.index
    }
}

pub struct ReportService {
    store_db: MprsDb,
    index_db: MprsDb,
    reports: EntitySync<Report>,
    authors: EntitySync<Author>,
    bathrooms: EntitySync<Bathroom>,
    bedrooms: EntitySync<Bedroom>,
    entrances: EntitySync<Entrance>,
    env_factors: EntitySync<EnvFactor>,
    infrastructures: EntitySync<Infrastructure>,
    kitchens: EntitySync<Kitchen>,
    living_rooms: EntitySync<LivingRoom>,
}

fn entity_sync<E: Record>(store_db: &MprsDb, index_db: &MprsDb) -> EntitySync<E> {
    Synchronizer::new(
        SqlStore::new(store_db.conn().clone()),
        FtsIndex::new(index_db.conn().clone()),
    )
}

/// Run `$body` once per kind with `$ty` bound to the entity type.
macro_rules! for_each_kind {
    ($ty:ident => $body:expr) => {{
        {
            type $ty = Report;
            $body
        }
        {
            type $ty = Author;
            $body
        }
        {
            type $ty = Bathroom;
            $body
        }
        {
            type $ty = Bedroom;
            $body
        }
        {
            type $ty = Entrance;
            $body
        }
        {
            type $ty = EnvFactor;
            $body
        }
        {
            type $ty = Infrastructure;
            $body
        }
        {
            type $ty = Kitchen;
            $body
        }
        {
            type $ty = LivingRoom;
            $body
        }
    }};
}

impl ReportService {
    /// Open both databases from local paths (`":memory:"` for tests).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if either database cannot be opened or migrated.
    pub async fn open_local(store_path: &str, index_path: &str) -> Result<Self, DatabaseError> {
        let store_db = MprsDb::open_store(store_path).await?;
        let index_db = MprsDb::open_index(index_path).await?;
        Ok(Self::from_dbs(store_db, index_db))
    }

    /// Open the databases named in the configuration, creating their parent
    /// directories when needed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a directory cannot be created or a database
    /// cannot be opened.
    pub async fn from_config(config: &MprsConfig) -> Result<Self, DatabaseError> {
        for dir in [config.store.parent_dir(), config.index.parent_dir()]
            .into_iter()
            .flatten()
        {
            std::fs::create_dir_all(&dir).map_err(|e| {
                DatabaseError::Other(anyhow::anyhow!("create {}: {e}", dir.display()))
            })?;
        }
        Self::open_local(&config.store.path, &config.index.path).await
    }

    #[must_use]
    pub fn from_dbs(store_db: MprsDb, index_db: MprsDb) -> Self {
        Self {
            reports: entity_sync(&store_db, &index_db),
            authors: entity_sync(&store_db, &index_db),
            bathrooms: entity_sync(&store_db, &index_db),
            bedrooms: entity_sync(&store_db, &index_db),
            entrances: entity_sync(&store_db, &index_db),
            env_factors: entity_sync(&store_db, &index_db),
            infrastructures: entity_sync(&store_db, &index_db),
            kitchens: entity_sync(&store_db, &index_db),
            living_rooms: entity_sync(&store_db, &index_db),
            store_db,
            index_db,
        }
    }

    /// The synchronizer for kind `E`.
    #[must_use]
    pub fn sync<E: Record>(&self) -> &EntitySync<E> {
        E::synchronizer(self)
    }

    #[must_use]
    pub const fn store_db(&self) -> &MprsDb {
        &self.store_db
    }

    #[must_use]
    pub const fn index_db(&self) -> &MprsDb {
        &self.index_db
    }

    #[must_use]
    pub const fn reports(&self) -> &EntitySync<Report> {
        &self.reports
    }

    #[must_use]
    pub const fn authors(&self) -> &EntitySync<Author> {
        &self.authors
    }

    #[must_use]
    pub const fn bathrooms(&self) -> &EntitySync<Bathroom> {
        &self.bathrooms
    }

    #[must_use]
    pub const fn bedrooms(&self) -> &EntitySync<Bedroom> {
        &self.bedrooms
    }

    #[must_use]
    pub const fn entrances(&self) -> &EntitySync<Entrance> {
        &self.entrances
    }

    #[must_use]
    pub const fn env_factors(&self) -> &EntitySync<EnvFactor> {
        &self.env_factors
    }

    #[must_use]
    pub const fn infrastructures(&self) -> &EntitySync<Infrastructure> {
        &self.infrastructures
    }

    #[must_use]
    pub const fn kitchens(&self) -> &EntitySync<Kitchen> {
        &self.kitchens
    }

    #[must_use]
    pub const fn living_rooms(&self) -> &EntitySync<LivingRoom> {
        &self.living_rooms
    }

    /// Store and index counts for every kind.
    ///
    /// # Errors
    ///
    /// Returns the first `SyncError` raised by a count.
    pub async fn counts(&self) -> Result<Vec<KindCounts>, SyncError> {
        let mut out = Vec::with_capacity(EntityKind::ALL.len());
        for_each_kind!(E => {
            let sync = self.sync::<E>();
            out.push(KindCounts {
                kind: E::KIND,
                store: sync.count_store().await?,
                index: sync.count_index().await?,
            });
        });
        Ok(out)
    }

    /// Rebuild the index of every kind from the store.
    ///
    /// # Errors
    ///
    /// Stops at the first kind whose reindex fails.
    pub async fn reindex_all(&self) -> Result<Vec<(EntityKind, u64)>, SyncError> {
        let mut out = Vec::with_capacity(EntityKind::ALL.len());
        for_each_kind!(E => {
            let written = self.sync::<E>().reindex().await?;
            out.push((E::KIND, written));
        });
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{author, bedroom, test_service};
    use mprs_core::enums::QualityStateType;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn generic_accessor_matches_named_one() {
        let svc = test_service().await;
        let created = svc.bedrooms().create(bedroom(1, "A", QualityStateType::High)).await.unwrap();
        let found = svc.sync::<Bedroom>().find_one(created.id.unwrap()).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn kinds_do_not_share_tables() {
        let svc = test_service().await;
        svc.authors().create(author("Kim")).await.unwrap();
        svc.bedrooms().create(bedroom(1, "A", QualityStateType::High)).await.unwrap();

        let counts = svc.counts().await.unwrap();
        assert_eq!(counts.len(), EntityKind::ALL.len());
        for c in &counts {
            let expected = u64::from(matches!(c.kind, EntityKind::Author | EntityKind::Bedroom));
            assert_eq!((c.store, c.index), (expected, expected), "{}", c.kind);
            assert!(c.in_sync());
        }
    }

    #[tokio::test]
    async fn reindex_all_covers_every_kind() {
        let svc = test_service().await;
        svc.authors().create(author("Kim")).await.unwrap();
        svc.index_db()
            .conn()
            .execute("DELETE FROM author_search", ())
            .await
            .unwrap();

        let written = svc.reindex_all().await.unwrap();
        assert_eq!(written.len(), EntityKind::ALL.len());
        assert!(written.contains(&(EntityKind::Author, 1)));
        assert_eq!(svc.authors().count_index().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn from_config_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = MprsConfig::default();
        config.store.path = dir.path().join("nested/store.db").display().to_string();
        config.index.path = dir.path().join("nested/index.db").display().to_string();

        let svc = ReportService::from_config(&config).await.unwrap();
        svc.authors().create(author("Lee")).await.unwrap();
        assert!(dir.path().join("nested/store.db").exists());
        assert!(dir.path().join("nested/index.db").exists());
    }
}
