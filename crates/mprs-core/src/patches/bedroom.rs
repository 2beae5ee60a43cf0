//! Bedroom partial update.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QualityStateType;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BedroomPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedroom_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_level: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closet_yn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac_yn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
