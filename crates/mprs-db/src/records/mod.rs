//! Store mappings: one `Record` impl per entity kind.
//!
//! Column order in `COLUMNS`, `to_values` and `from_row` must agree. Row
//! index 0 is always `id`; field columns start at 1.

mod author;
mod bathroom;
mod bedroom;
mod entrance;
mod env_factor;
mod infrastructure;
mod kitchen;
mod living_room;
mod report;

use mprs_core::entity::Entity;

use crate::error::DatabaseError;
use crate::service::ReportService;
use crate::sync::EntitySync;

/// An entity that has a store table and a synchronizer in [`ReportService`].
pub trait Record: Entity {
    /// Table columns after `id`, in `to_values` order.
    const COLUMNS: &'static [&'static str];

    /// Build the entity from a row selected as `id, COLUMNS...`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` when a column is missing or holds bad data.
    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError>;

    /// Column values in `COLUMNS` order (without `id`).
    fn to_values(&self) -> Vec<libsql::Value>;

    /// This kind's synchronizer within the service.
    fn synchronizer(service: &ReportService) -> &EntitySync<Self>;
}
