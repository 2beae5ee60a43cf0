use libsql::Value;
use mprs_core::entities::Report;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum, parse_optional_datetime};
use crate::records::Record;
use crate::service::ReportService;
use crate::sync::EntitySync;

impl Record for Report {
    const COLUMNS: &'static [&'static str] = &[
        "report_title",
        "report_date",
        "author_id",
        "summary",
        "exterior_state",
        "construction_year",
        "maintenance_state",
        "parking_facility",
        "parking_count",
        "elevator_state",
        "noise_state",
        "homepad_state",
        "cctv_yn",
        "fire_safety_state",
        "door_security_state",
        "maintenance_fee",
        "redevelopment_yn",
        "rental_demand",
        "community_rules",
        "complex_id",
        "complex_name",
        "property_id",
        "property_name",
        "created_at",
        "updated_at",
    ];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            report_title: row.get::<String>(1)?,
            report_date: parse_optional_datetime(row.get::<Option<String>>(2)?.as_deref())?,
            author_id: row.get::<i64>(3)?,
            summary: row.get::<Option<String>>(4)?,
            exterior_state: parse_enum(&row.get::<String>(5)?)?,
            construction_year: row.get::<Option<i32>>(6)?,
            maintenance_state: parse_enum(&row.get::<String>(7)?)?,
            parking_facility: row.get::<Option<String>>(8)?,
            parking_count: row.get::<Option<i32>>(9)?,
            elevator_state: parse_enum(&row.get::<String>(10)?)?,
            noise_state: parse_enum(&row.get::<String>(11)?)?,
            homepad_state: parse_enum(&row.get::<String>(12)?)?,
            cctv_yn: row.get::<Option<String>>(13)?,
            fire_safety_state: parse_enum(&row.get::<String>(14)?)?,
            door_security_state: parse_enum(&row.get::<String>(15)?)?,
            maintenance_fee: row.get::<Option<i32>>(16)?,
            redevelopment_yn: row.get::<Option<String>>(17)?,
            rental_demand: row.get::<Option<String>>(18)?,
            community_rules: row.get::<Option<String>>(19)?,
            complex_id: row.get::<i64>(20)?,
            complex_name: row.get::<String>(21)?,
            property_id: row.get::<i64>(22)?,
            property_name: row.get::<String>(23)?,
            created_at: parse_datetime(&row.get::<String>(24)?)?,
            updated_at: parse_optional_datetime(row.get::<Option<String>>(25)?.as_deref())?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            self.report_title.clone().into(),
            self.report_date.map(|d| d.to_rfc3339()).into(),
            self.author_id.into(),
            self.summary.clone().into(),
            self.exterior_state.as_str().into(),
            self.construction_year.into(),
            self.maintenance_state.as_str().into(),
            self.parking_facility.clone().into(),
            self.parking_count.into(),
            self.elevator_state.as_str().into(),
            self.noise_state.as_str().into(),
            self.homepad_state.as_str().into(),
            self.cctv_yn.clone().into(),
            self.fire_safety_state.as_str().into(),
            self.door_security_state.as_str().into(),
            self.maintenance_fee.into(),
            self.redevelopment_yn.clone().into(),
            self.rental_demand.clone().into(),
            self.community_rules.clone().into(),
            self.complex_id.into(),
            self.complex_name.clone().into(),
            self.property_id.into(),
            self.property_name.clone().into(),
            self.created_at.to_rfc3339().into(),
            self.updated_at.map(|d| d.to_rfc3339()).into(),
        ]
    }

    fn synchronizer(service: &ReportService) -> &EntitySync<Self> {
        service.reports()
    }
}
