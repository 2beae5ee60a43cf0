//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::error::DatabaseError;
use crate::{DbRole, MprsDb};

/// Store schema: one table per entity kind plus parent-key indexes.
const STORE_001: &str = include_str!("../migrations/001_store.sql");
/// Index schema: one FTS5 table per entity kind.
const INDEX_001: &str = include_str!("../migrations/001_index.sql");

impl MprsDb {
    /// Run the embedded migrations for this database's role.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        let (name, sql) = match self.role {
            DbRole::Store => ("001_store", STORE_001),
            DbRole::Index => ("001_index", INDEX_001),
        };
        self.conn
            .execute_batch(sql)
            .await
            .map_err(|e| DatabaseError::Migration(format!("{name}: {e}")))?;
        Ok(())
    }
}
