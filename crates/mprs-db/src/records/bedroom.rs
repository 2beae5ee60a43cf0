use libsql::Value;
use mprs_core::entities::Bedroom;

use crate::error::DatabaseError;
use crate::helpers::parse_enum;
use crate::records::Record;
use crate::service::ReportService;
use crate::sync::EntitySync;

impl Record for Bedroom {
    const COLUMNS: &'static [&'static str] = &[
        "report_id",
        "bedroom_name",
        "condition_level",
        "room_size",
        "closet_yn",
        "ac_yn",
        "window_location",
        "window_size",
        "remarks",
    ];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            report_id: row.get::<i64>(1)?,
            bedroom_name: row.get::<String>(2)?,
            condition_level: parse_enum(&row.get::<String>(3)?)?,
            room_size: row.get::<Option<f64>>(4)?,
            closet_yn: row.get::<Option<String>>(5)?,
            ac_yn: row.get::<Option<String>>(6)?,
            window_location: row.get::<Option<String>>(7)?,
            window_size: row.get::<Option<String>>(8)?,
            remarks: row.get::<Option<String>>(9)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            self.report_id.into(),
            self.bedroom_name.clone().into(),
            self.condition_level.as_str().into(),
            self.room_size.into(),
            self.closet_yn.clone().into(),
            self.ac_yn.clone().into(),
            self.window_location.clone().into(),
            self.window_size.clone().into(),
            self.remarks.clone().into(),
        ]
    }

    fn synchronizer(service: &ReportService) -> &EntitySync<Self> {
        service.bedrooms()
    }
}
