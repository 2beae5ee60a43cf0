//! Infrastructure partial update.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{InfraType, QualityStateType};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructurePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infra_type: Option<InfraType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infra_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_level: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infra_distance: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infra_distance_unit: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
