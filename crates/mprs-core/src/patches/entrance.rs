//! Entrance partial update.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QualityStateType;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntrancePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condtion_level: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoe_rack_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pantry_presence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
