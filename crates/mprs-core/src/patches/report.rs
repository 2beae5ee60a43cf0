//! Report partial update.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QualityStateType;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exterior_state: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_state: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_facility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevator_state: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_state: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepad_state: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cctv_yn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_safety_state: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_security_state: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_fee: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redevelopment_yn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_demand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_rules: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
