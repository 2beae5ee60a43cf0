use libsql::Value;
use mprs_core::entities::Kitchen;

use crate::error::DatabaseError;
use crate::helpers::parse_enum;
use crate::records::Record;
use crate::service::ReportService;
use crate::sync::EntitySync;

impl Record for Kitchen {
    const COLUMNS: &'static [&'static str] = &[
        "report_id",
        "kitchen_name",
        "condition_level",
        "built_in_cabinet",
        "sink_condition",
        "ventilation_system",
        "appliance_provision",
        "remarks",
    ];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            report_id: row.get::<i64>(1)?,
            kitchen_name: row.get::<String>(2)?,
            condition_level: parse_enum(&row.get::<String>(3)?)?,
            built_in_cabinet: row.get::<Option<String>>(4)?,
            sink_condition: parse_enum(&row.get::<String>(5)?)?,
            ventilation_system: row.get::<Option<String>>(6)?,
            appliance_provision: row.get::<Option<String>>(7)?,
            remarks: row.get::<Option<String>>(8)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            self.report_id.into(),
            self.kitchen_name.clone().into(),
            self.condition_level.as_str().into(),
            self.built_in_cabinet.clone().into(),
            self.sink_condition.as_str().into(),
            self.ventilation_system.clone().into(),
            self.appliance_provision.clone().into(),
            self.remarks.clone().into(),
        ]
    }

    fn synchronizer(service: &ReportService) -> &EntitySync<Self> {
        service.kitchens()
    }
}
