use libsql::Value;
use mprs_core::entities::Infrastructure;
use mprs_core::enums::QualityStateType;

use crate::error::DatabaseError;
use crate::helpers::{parse_enum, parse_optional_enum};
use crate::records::Record;
use crate::service::ReportService;
use crate::sync::EntitySync;

impl Record for Infrastructure {
    const COLUMNS: &'static [&'static str] = &[
        "report_id",
        "infra_type",
        "infra_name",
        "condition_level",
        "infra_distance",
        "infra_distance_unit",
        "remarks",
    ];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            report_id: row.get::<i64>(1)?,
            infra_type: parse_enum(&row.get::<String>(2)?)?,
            infra_name: row.get::<String>(3)?,
            condition_level: parse_enum(&row.get::<String>(4)?)?,
            infra_distance: row.get::<Option<i32>>(5)?,
            infra_distance_unit: parse_optional_enum(row.get::<Option<String>>(6)?.as_deref())?,
            remarks: row.get::<Option<String>>(7)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            self.report_id.into(),
            self.infra_type.as_str().into(),
            self.infra_name.clone().into(),
            self.condition_level.as_str().into(),
            self.infra_distance.into(),
            self.infra_distance_unit.map(QualityStateType::as_str).into(),
            self.remarks.clone().into(),
        ]
    }

    fn synchronizer(service: &ReportService) -> &EntitySync<Self> {
        service.infrastructures()
    }
}
