use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::enums::{EntityKind, QualityStateType};
use crate::errors::CoreError;
use crate::merge_patch;
use crate::patches::ReportPatch;
use crate::validate;

/// Root inspection report for one property in a housing complex.
///
/// `author_id` is a plain foreign key: the author is looked up, never owned.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub id: Option<i64>,
    pub report_title: String,
    pub report_date: Option<DateTime<Utc>>,
    pub author_id: i64,
    pub summary: Option<String>,
    pub exterior_state: QualityStateType,
    pub construction_year: Option<i32>,
    pub maintenance_state: QualityStateType,
    pub parking_facility: Option<String>,
    pub parking_count: Option<i32>,
    pub elevator_state: QualityStateType,
    pub noise_state: QualityStateType,
    pub homepad_state: QualityStateType,
    pub cctv_yn: Option<String>,
    pub fire_safety_state: QualityStateType,
    pub door_security_state: QualityStateType,
    pub maintenance_fee: Option<i32>,
    pub redevelopment_yn: Option<String>,
    pub rental_demand: Option<String>,
    pub community_rules: Option<String>,
    pub complex_id: i64,
    pub complex_name: String,
    pub property_id: i64,
    pub property_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Report {
    type Patch = ReportPatch;

    const KIND: EntityKind = EntityKind::Report;
    const PARENT_KEY: Option<&'static str> = Some("author_id");

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    fn apply_patch(&mut self, patch: ReportPatch) {
        merge_patch!(self, patch;
            required: [
                report_title,
                author_id,
                exterior_state,
                maintenance_state,
                elevator_state,
                noise_state,
                homepad_state,
                fire_safety_state,
                door_security_state,
                complex_id,
                complex_name,
                property_id,
                property_name,
                created_at,
            ];
            optional: [
                report_date,
                summary,
                construction_year,
                parking_facility,
                parking_count,
                cctv_yn,
                maintenance_fee,
                redevelopment_yn,
                rental_demand,
                community_rules,
                updated_at,
            ]
        );
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate::required_text("reportTitle", &self.report_title, Some(200))?;
        validate::max_len("parkingFacility", self.parking_facility.as_deref(), 500)?;
        validate::flag("cctvYn", self.cctv_yn.as_deref())?;
        validate::flag("redevelopmentYn", self.redevelopment_yn.as_deref())?;
        validate::max_len("rentalDemand", self.rental_demand.as_deref(), 200)?;
        validate::max_len("communityRules", self.community_rules.as_deref(), 2000)?;
        validate::required_text("complexName", &self.complex_name, Some(255))?;
        validate::required_text("propertyName", &self.property_name, Some(255))
    }
}
