use libsql::Value;
use mprs_core::entities::Bathroom;

use crate::error::DatabaseError;
use crate::helpers::parse_enum;
use crate::records::Record;
use crate::service::ReportService;
use crate::sync::EntitySync;

impl Record for Bathroom {
    const COLUMNS: &'static [&'static str] = &[
        "report_id",
        "bathroom_name",
        "condtion_level",
        "bathroom_size",
        "water_pressure",
        "shower_booth_presence",
        "bathtub_presence",
        "floor_and_ceiling",
        "remarks",
    ];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            report_id: row.get::<i64>(1)?,
            bathroom_name: row.get::<String>(2)?,
            condtion_level: parse_enum(&row.get::<String>(3)?)?,
            bathroom_size: row.get::<Option<f64>>(4)?,
            water_pressure: parse_enum(&row.get::<String>(5)?)?,
            shower_booth_presence: row.get::<Option<String>>(6)?,
            bathtub_presence: row.get::<Option<String>>(7)?,
            floor_and_ceiling: parse_enum(&row.get::<String>(8)?)?,
            remarks: row.get::<Option<String>>(9)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            self.report_id.into(),
            self.bathroom_name.clone().into(),
            self.condtion_level.as_str().into(),
            self.bathroom_size.into(),
            self.water_pressure.as_str().into(),
            self.shower_booth_presence.clone().into(),
            self.bathtub_presence.clone().into(),
            self.floor_and_ceiling.as_str().into(),
            self.remarks.clone().into(),
        ]
    }

    fn synchronizer(service: &ReportService) -> &EntitySync<Self> {
        service.bathrooms()
    }
}
