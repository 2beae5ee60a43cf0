//! Bathroom partial update.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QualityStateType;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BathroomPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathroom_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condtion_level: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathroom_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_pressure: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shower_booth_presence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathtub_presence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_and_ceiling: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
