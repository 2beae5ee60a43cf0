//! Search index port and its FTS5 adapter.
//!
//! Each kind has an FTS5 table `{table}_search(id, <fields>..., doc UNINDEXED)`
//! in the index database. `rowid` and `id` carry the entity id, every record
//! field has a column named as in the JSON document (`bedroomName`,
//! `conditionLevel`) and `doc` holds the JSON document that searches return.
//! A bare term matches any column; `bedroomName:master` matches one.

use std::marker::PhantomData;

use async_trait::async_trait;
use mprs_core::entity::Entity;
use mprs_core::paging::{Page, PageSpec};
use serde_json::Value as Json;

use crate::error::DatabaseError;
use crate::helpers::{limit_offset, read_count};

/// Secondary, eventually consistent full-text projection of one entity kind.
#[async_trait]
pub trait Index<E: Entity>: Send + Sync {
    /// Insert or replace the document for the entity's id.
    async fn put(&self, entity: &E) -> Result<(), DatabaseError>;

    /// Remove the document. Removing a missing document is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError>;

    /// Run `query` against the current index contents. An empty query or `*`
    /// matches every document.
    async fn search(&self, query: &str, spec: &PageSpec) -> Result<Page<E>, DatabaseError>;

    async fn count(&self) -> Result<u64, DatabaseError>;

    /// The indexed document for `id`, as stored in the index.
    async fn get(&self, id: i64) -> Result<Option<E>, DatabaseError>;

    /// Drop every document of this kind.
    async fn clear(&self) -> Result<(), DatabaseError>;
}

/// FTS5 table-backed index.
pub struct FtsIndex<E> {
    conn: libsql::Connection,
    table: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> FtsIndex<E> {
    #[must_use]
    pub fn new(conn: libsql::Connection) -> Self {
        Self {
            conn,
            table: format!("{}_search", E::KIND.table()),
            _entity: PhantomData,
        }
    }

    fn decode(doc: &str) -> Result<E, DatabaseError> {
        serde_json::from_str(doc).map_err(|e| {
            DatabaseError::InvalidState(format!("corrupt {} document: {e}", E::KIND))
        })
    }

    async fn collect(mut rows: libsql::Rows) -> Result<Vec<E>, DatabaseError> {
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(Self::decode(&row.get::<String>(0)?)?);
        }
        Ok(items)
    }
}

/// Whether a query string means "everything".
fn is_match_all(query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || query == "*"
}

/// Column text for one field. Nulls stay NULL so they match nothing.
fn column_value(value: &Json) -> libsql::Value {
    match value {
        Json::Null => libsql::Value::Null,
        Json::String(s) => libsql::Value::Text(s.clone()),
        other => libsql::Value::Text(other.to_string()),
    }
}

#[async_trait]
impl<E: Entity> Index<E> for FtsIndex<E> {
    async fn put(&self, entity: &E) -> Result<(), DatabaseError> {
        let id = entity.id().ok_or_else(|| {
            DatabaseError::InvalidState(format!("cannot index {} without an id", E::KIND))
        })?;
        let doc = serde_json::to_value(entity).map_err(|e| DatabaseError::Other(e.into()))?;
        let Json::Object(fields) = &doc else {
            return Err(DatabaseError::InvalidState(format!(
                "{} does not serialize to a JSON object",
                E::KIND
            )));
        };

        let mut columns = vec!["rowid".to_string(), "id".to_string()];
        let mut values = vec![libsql::Value::Integer(id), libsql::Value::Text(id.to_string())];
        for (field, value) in fields.iter().filter(|(field, _)| *field != "id") {
            columns.push(format!("\"{field}\""));
            values.push(column_value(value));
        }
        columns.push("doc".to_string());
        values.push(libsql::Value::Text(doc.to_string()));

        let placeholders = (1..=values.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        // One statement: FTS5 drops the old row for this rowid inside the
        // insert, so concurrent puts of one id cannot interleave.
        self.conn
            .execute(
                &format!(
                    "INSERT OR REPLACE INTO {} ({}) VALUES ({placeholders})",
                    self.table,
                    columns.join(", ")
                ),
                libsql::params_from_iter(values),
            )
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        self.conn
            .execute(&format!("DELETE FROM {} WHERE rowid = ?1", self.table), [id])
            .await?;
        Ok(())
    }

    async fn search(&self, query: &str, spec: &PageSpec) -> Result<Page<E>, DatabaseError> {
        let (limit, offset) = limit_offset(spec);
        let table = &self.table;

        if is_match_all(query) {
            let rows = self
                .conn
                .query(
                    &format!("SELECT doc FROM {table} ORDER BY rowid LIMIT ?1 OFFSET ?2"),
                    [limit, offset],
                )
                .await?;
            let items = Self::collect(rows).await?;
            let total = self.count().await?;
            return Ok(Page::new(items, total, spec));
        }

        let query = query.trim();
        let rows = self
            .conn
            .query(
                &format!(
                    "SELECT doc FROM {table} WHERE {table} MATCH ?1 ORDER BY rank, rowid LIMIT ?2 OFFSET ?3"
                ),
                libsql::params![query, limit, offset],
            )
            .await?;
        let items = Self::collect(rows).await?;
        let total = read_count(
            self.conn
                .query(
                    &format!("SELECT count(*) FROM {table} WHERE {table} MATCH ?1"),
                    [query],
                )
                .await?,
        )
        .await?;
        Ok(Page::new(items, total, spec))
    }

    async fn count(&self) -> Result<u64, DatabaseError> {
        read_count(
            self.conn
                .query(&format!("SELECT count(*) FROM {}", self.table), ())
                .await?,
        )
        .await
    }

    async fn get(&self, id: i64) -> Result<Option<E>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT doc FROM {} WHERE rowid = ?1", self.table),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(Self::decode(&row.get::<String>(0)?)?)),
            None => Ok(None),
        }
    }

    async fn clear(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute(&format!("DELETE FROM {}", self.table), ())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MprsDb;
    use crate::test_support::helpers::bedroom;
    use mprs_core::entities::Bedroom;
    use mprs_core::enums::QualityStateType;
    use pretty_assertions::assert_eq;

    async fn bedroom_index() -> (MprsDb, FtsIndex<Bedroom>) {
        let db = MprsDb::open_index(":memory:").await.unwrap();
        let index = FtsIndex::new(db.conn().clone());
        (db, index)
    }

    #[test]
    fn column_values_keep_nulls_and_stringify_numbers() {
        assert!(matches!(column_value(&serde_json::json!(null)), libsql::Value::Null));
        assert!(matches!(
            column_value(&serde_json::json!("Master")),
            libsql::Value::Text(text) if text == "Master"
        ));
        assert!(matches!(
            column_value(&serde_json::json!(12.5)),
            libsql::Value::Text(text) if text == "12.5"
        ));
    }

    #[test]
    fn match_all_queries() {
        assert!(is_match_all(""));
        assert!(is_match_all("  * "));
        assert!(!is_match_all("Master"));
    }

    #[tokio::test]
    async fn put_then_search_by_field_value() {
        let (_db, index) = bedroom_index().await;
        let doc = bedroom(1, "Master", QualityStateType::High).with_id(1);
        index.put(&doc).await.unwrap();

        let page = index.search("master", &PageSpec::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items, vec![doc]);
    }

    #[tokio::test]
    async fn id_column_filter() {
        let (_db, index) = bedroom_index().await;
        for id in 1..=3 {
            index
                .put(&bedroom(1, "Room", QualityStateType::High).with_id(id))
                .await
                .unwrap();
        }
        let page = index.search("id:2", &PageSpec::default()).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, Some(2));
    }

    #[tokio::test]
    async fn put_replaces_existing_document() {
        let (_db, index) = bedroom_index().await;
        index
            .put(&bedroom(1, "Old", QualityStateType::High).with_id(5))
            .await
            .unwrap();
        let newer = bedroom(1, "New", QualityStateType::Middle).with_id(5);
        index.put(&newer).await.unwrap();

        assert_eq!(index.count().await.unwrap(), 1);
        assert_eq!(index.get(5).await.unwrap(), Some(newer));
        assert_eq!(index.search("Old", &PageSpec::default()).await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn put_without_id_is_rejected() {
        let (_db, index) = bedroom_index().await;
        let err = index
            .put(&bedroom(1, "A", QualityStateType::High))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }

    #[tokio::test]
    async fn wildcard_lists_everything_in_id_order() {
        let (_db, index) = bedroom_index().await;
        for id in [3, 1, 2] {
            index
                .put(&bedroom(1, "Room", QualityStateType::Low).with_id(id))
                .await
                .unwrap();
        }
        let page = index.search("*", &PageSpec::new(0, 2)).await.unwrap();
        assert_eq!(page.total, 3);
        let ids: Vec<_> = page.items.iter().map(|b| b.id).collect();
        assert_eq!(ids, [Some(1), Some(2)]);
    }

    #[tokio::test]
    async fn delete_and_clear() {
        let (_db, index) = bedroom_index().await;
        index
            .put(&bedroom(1, "A", QualityStateType::High).with_id(1))
            .await
            .unwrap();
        index
            .put(&bedroom(1, "B", QualityStateType::High).with_id(2))
            .await
            .unwrap();

        index.delete_by_id(1).await.unwrap();
        index.delete_by_id(1).await.unwrap();
        assert_eq!(index.get(1).await.unwrap(), None);
        assert_eq!(index.count().await.unwrap(), 1);

        index.clear().await.unwrap();
        assert_eq!(index.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn malformed_query_is_an_error() {
        let (_db, index) = bedroom_index().await;
        let err = index
            .search("\"unterminated", &PageSpec::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::LibSql(_)));
    }
}
