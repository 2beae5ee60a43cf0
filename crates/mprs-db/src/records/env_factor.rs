use libsql::Value;
use mprs_core::entities::EnvFactor;

use crate::error::DatabaseError;
use crate::records::Record;
use crate::service::ReportService;
use crate::sync::EntitySync;

impl Record for EnvFactor {
    const COLUMNS: &'static [&'static str] =
        &["report_id", "env_factor_name", "env_factor_distance", "remarks"];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            report_id: row.get::<i64>(1)?,
            env_factor_name: row.get::<String>(2)?,
            env_factor_distance: row.get::<Option<f64>>(3)?,
            remarks: row.get::<Option<String>>(4)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            self.report_id.into(),
            self.env_factor_name.clone().into(),
            self.env_factor_distance.into(),
            self.remarks.clone().into(),
        ]
    }

    fn synchronizer(service: &ReportService) -> &EntitySync<Self> {
        service.env_factors()
    }
}
