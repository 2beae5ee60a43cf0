//! Store port and its libSQL adapter.
//!
//! The store is the system of record. Every entity kind has one table named
//! after `EntityKind::table`, with an `INTEGER PRIMARY KEY AUTOINCREMENT` id
//! and one column per field (`Record::COLUMNS`).

use std::marker::PhantomData;

use async_trait::async_trait;
use libsql::Value;
use mprs_core::entity::Entity;
use mprs_core::paging::{Page, PageSpec, SortOrder};

use crate::error::DatabaseError;
use crate::helpers::{column_name, limit_offset, read_count};
use crate::records::Record;

/// Authoritative persistence for one entity kind.
#[async_trait]
pub trait Store<E: Entity>: Send + Sync {
    /// Insert when `id` is absent (the returned entity carries the new id),
    /// otherwise replace every column of the row with that id.
    ///
    /// Replacing a row that does not exist fails with `DatabaseError::NoResult`.
    async fn save(&self, entity: E) -> Result<E, DatabaseError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<E>, DatabaseError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError>;

    /// One page plus the total row count, ordered by `spec.sort` then `id`.
    async fn find_all_paged(&self, spec: &PageSpec) -> Result<Page<E>, DatabaseError>;

    async fn count(&self) -> Result<u64, DatabaseError>;

    /// Delete the row with this id. Deleting a missing row is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError>;

    /// Rows whose parent reference (`E::PARENT_KEY`) equals `parent_id`.
    async fn find_by_parent(
        &self,
        parent_id: i64,
        spec: &PageSpec,
    ) -> Result<Page<E>, DatabaseError>;
}

/// libSQL table-backed store.
pub struct SqlStore<E> {
    conn: libsql::Connection,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Record> SqlStore<E> {
    #[must_use]
    pub const fn new(conn: libsql::Connection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    fn select_list() -> String {
        format!("id, {}", E::COLUMNS.join(", "))
    }

    /// `ORDER BY` clause for a sort request. Only `id` and the kind's own
    /// columns are accepted, so the property never reaches SQL unchecked.
    fn order_by(sort: &SortOrder) -> Result<String, DatabaseError> {
        let column = column_name(&sort.property);
        if column == "id" {
            return Ok(format!("ORDER BY id {}", sort.direction.as_sql()));
        }
        if !E::COLUMNS.contains(&column.as_str()) {
            return Err(DatabaseError::InvalidState(format!(
                "unknown sort property '{}' for {}",
                sort.property,
                E::KIND
            )));
        }
        Ok(format!(
            "ORDER BY {column} {}, id ASC",
            sort.direction.as_sql()
        ))
    }

    async fn collect(mut rows: libsql::Rows) -> Result<Vec<E>, DatabaseError> {
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(E::from_row(&row)?);
        }
        Ok(items)
    }

    async fn insert(&self, entity: E) -> Result<E, DatabaseError> {
        let placeholders = (1..=E::COLUMNS.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders}) RETURNING id",
            E::KIND.table(),
            E::COLUMNS.join(", ")
        );
        let mut rows = self
            .conn
            .query(&sql, libsql::params_from_iter(entity.to_values()))
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let id = row.get::<i64>(0)?;
        Ok(entity.with_id(id))
    }

    async fn replace(&self, id: i64, entity: E) -> Result<E, DatabaseError> {
        let sets = E::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ?{}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {sets} WHERE id = ?{}",
            E::KIND.table(),
            E::COLUMNS.len() + 1
        );
        let mut params = entity.to_values();
        params.push(Value::Integer(id));

        let affected = self
            .conn
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(entity)
    }
}

#[async_trait]
impl<E: Record> Store<E> for SqlStore<E> {
    async fn save(&self, entity: E) -> Result<E, DatabaseError> {
        match entity.id() {
            None => self.insert(entity).await,
            Some(id) => self.replace(id, entity).await,
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            Self::select_list(),
            E::KIND.table()
        );
        let mut rows = self.conn.query(&sql, [id]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(E::from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        let sql = format!("SELECT 1 FROM {} WHERE id = ?1", E::KIND.table());
        let mut rows = self.conn.query(&sql, [id]).await?;
        Ok(rows.next().await?.is_some())
    }

    async fn find_all_paged(&self, spec: &PageSpec) -> Result<Page<E>, DatabaseError> {
        let order_by = Self::order_by(&spec.sort)?;
        let (limit, offset) = limit_offset(spec);
        let sql = format!(
            "SELECT {} FROM {} {order_by} LIMIT ?1 OFFSET ?2",
            Self::select_list(),
            E::KIND.table()
        );
        let rows = self.conn.query(&sql, [limit, offset]).await?;
        let items = Self::collect(rows).await?;
        let total = self.count().await?;
        Ok(Page::new(items, total, spec))
    }

    async fn count(&self) -> Result<u64, DatabaseError> {
        let sql = format!("SELECT count(*) FROM {}", E::KIND.table());
        read_count(self.conn.query(&sql, ()).await?).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", E::KIND.table());
        self.conn.execute(&sql, [id]).await?;
        Ok(())
    }

    async fn find_by_parent(
        &self,
        parent_id: i64,
        spec: &PageSpec,
    ) -> Result<Page<E>, DatabaseError> {
        let Some(parent_key) = E::PARENT_KEY else {
            return Err(DatabaseError::InvalidState(format!(
                "{} has no parent reference",
                E::KIND
            )));
        };
        let order_by = Self::order_by(&spec.sort)?;
        let (limit, offset) = limit_offset(spec);
        let table = E::KIND.table();

        let sql = format!(
            "SELECT {} FROM {table} WHERE {parent_key} = ?1 {order_by} LIMIT ?2 OFFSET ?3",
            Self::select_list()
        );
        let rows = self.conn.query(&sql, [parent_id, limit, offset]).await?;
        let items = Self::collect(rows).await?;

        let count_sql = format!("SELECT count(*) FROM {table} WHERE {parent_key} = ?1");
        let total = read_count(self.conn.query(&count_sql, [parent_id]).await?).await?;
        Ok(Page::new(items, total, spec))
    }
}
