use libsql::Value;
use mprs_core::entities::LivingRoom;

use crate::error::DatabaseError;
use crate::helpers::parse_enum;
use crate::records::Record;
use crate::service::ReportService;
use crate::sync::EntitySync;

impl Record for LivingRoom {
    const COLUMNS: &'static [&'static str] = &[
        "report_id",
        "living_room_name",
        "condition_level",
        "room_size",
        "wall_state",
        "floor_material",
        "sunlight",
        "remarks",
    ];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            report_id: row.get::<i64>(1)?,
            living_room_name: row.get::<String>(2)?,
            condition_level: parse_enum(&row.get::<String>(3)?)?,
            room_size: row.get::<Option<f64>>(4)?,
            wall_state: parse_enum(&row.get::<String>(5)?)?,
            floor_material: row.get::<Option<String>>(6)?,
            sunlight: row.get::<Option<String>>(7)?,
            remarks: row.get::<Option<String>>(8)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            self.report_id.into(),
            self.living_room_name.clone().into(),
            self.condition_level.as_str().into(),
            self.room_size.into(),
            self.wall_state.as_str().into(),
            self.floor_material.clone().into(),
            self.sunlight.clone().into(),
            self.remarks.clone().into(),
        ]
    }

    fn synchronizer(service: &ReportService) -> &EntitySync<Self> {
        service.living_rooms()
    }
}
