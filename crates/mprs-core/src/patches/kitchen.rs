//! Kitchen partial update.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QualityStateType;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KitchenPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kitchen_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_level: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_in_cabinet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink_condition: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ventilation_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliance_provision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
