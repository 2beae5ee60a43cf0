//! # mprs-db
//!
//! libSQL persistence for the MPRS report service.
//!
//! Two databases back the service: the store (one table per entity kind,
//! the system of record) and the search index (one FTS5 table per kind, a
//! rebuildable projection). The generic [`sync::Synchronizer`] writes the
//! store first and the index second, with no transaction spanning both.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29), which provides native FTS5.

pub mod boundary;
pub mod error;
pub mod helpers;
pub mod index;
mod migrations;
pub mod records;
pub mod service;
pub mod store;
pub mod sync;
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Which schema a database carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbRole {
    Store,
    Index,
}

/// Handle to one libSQL database and its single shared connection.
///
/// The connection is cloned into every store and index adapter. Clones share
/// the underlying `SQLite` connection, which is what keeps `:memory:`
/// databases visible to all of them.
pub struct MprsDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    role: DbRole,
}

impl MprsDb {
    /// Open (or create) a local store database and run its migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_store(path: &str) -> Result<Self, DatabaseError> {
        Self::open_local(path, DbRole::Store).await
    }

    /// Open (or create) a local index database and run its migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_index(path: &str) -> Result<Self, DatabaseError> {
        Self::open_local(path, DbRole::Index).await
    }

    async fn open_local(path: &str, role: DbRole) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let mprs_db = Self { db, conn, role };
        mprs_db.run_migrations().await?;
        tracing::debug!(path, ?role, "database opened");
        Ok(mprs_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn role(&self) -> DbRole {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mprs_core::enums::EntityKind;

    async fn table_exists(db: &MprsDb, name: &str) -> bool {
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                [name],
            )
            .await
            .unwrap();
        rows.next().await.unwrap().is_some()
    }

    #[tokio::test]
    async fn open_store_creates_kind_tables() {
        let db = MprsDb::open_store(":memory:").await.unwrap();
        assert_eq!(db.role(), DbRole::Store);
        for kind in EntityKind::ALL {
            assert!(table_exists(&db, kind.table()).await, "table '{kind}' should exist");
        }
    }

    #[tokio::test]
    async fn open_index_creates_fts_tables() {
        let db = MprsDb::open_index(":memory:").await.unwrap();
        for kind in EntityKind::ALL {
            let name = format!("{}_search", kind.table());
            assert!(table_exists(&db, &name).await, "FTS5 table '{name}' should exist");
            assert!(!table_exists(&db, kind.table()).await);
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = MprsDb::open_store(":memory:").await.unwrap();
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn ids_are_assigned_by_store() {
        let db = MprsDb::open_store(":memory:").await.unwrap();
        let mut rows = db
            .conn()
            .query(
                "INSERT INTO author (name, contact_info) VALUES (?1, ?2) RETURNING id",
                libsql::params!["Kim", "010-0000-0000"],
            )
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn fts5_matches_unicode_text() {
        let db = MprsDb::open_index(":memory:").await.unwrap();
        db.conn()
            .execute(
                "INSERT INTO bedroom_search (rowid, id, bedroomName, conditionLevel, doc) VALUES (1, '1', '안방', 'HIGH', '{}')",
                (),
            )
            .await
            .unwrap();
        let mut rows = db
            .conn()
            .query(
                "SELECT rowid FROM bedroom_search WHERE bedroom_search MATCH ?1",
                ["안방"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }
}
