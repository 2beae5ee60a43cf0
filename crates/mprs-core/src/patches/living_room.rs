//! LivingRoom partial update.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QualityStateType;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LivingRoomPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub living_room_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_level: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_state: Option<QualityStateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunlight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
