use libsql::Value;
use mprs_core::entities::Author;

use crate::error::DatabaseError;
use crate::records::Record;
use crate::service::ReportService;
use crate::sync::EntitySync;

impl Record for Author {
    const COLUMNS: &'static [&'static str] = &["name", "contact_info"];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            name: row.get::<String>(1)?,
            contact_info: row.get::<String>(2)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![self.name.clone().into(), self.contact_info.clone().into()]
    }

    fn synchronizer(service: &ReportService) -> &EntitySync<Self> {
        service.authors()
    }
}
