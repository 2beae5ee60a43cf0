use libsql::Value;
use mprs_core::entities::Entrance;

use crate::error::DatabaseError;
use crate::helpers::parse_enum;
use crate::records::Record;
use crate::service::ReportService;
use crate::sync::EntitySync;

impl Record for Entrance {
    const COLUMNS: &'static [&'static str] = &[
        "report_id",
        "entrance_name",
        "condtion_level",
        "entrance_size",
        "shoe_rack_size",
        "pantry_presence",
        "remarks",
    ];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            report_id: row.get::<i64>(1)?,
            entrance_name: row.get::<String>(2)?,
            condtion_level: parse_enum(&row.get::<String>(3)?)?,
            entrance_size: row.get::<Option<f64>>(4)?,
            shoe_rack_size: row.get::<Option<f64>>(5)?,
            pantry_presence: row.get::<Option<String>>(6)?,
            remarks: row.get::<Option<String>>(7)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            self.report_id.into(),
            self.entrance_name.clone().into(),
            self.condtion_level.as_str().into(),
            self.entrance_size.into(),
            self.shoe_rack_size.into(),
            self.pantry_presence.clone().into(),
            self.remarks.clone().into(),
        ]
    }

    fn synchronizer(service: &ReportService) -> &EntitySync<Self> {
        service.entrances()
    }
}
