use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::enums::{EntityKind, QualityStateType};
use crate::errors::CoreError;
use crate::merge_patch;
use crate::patches::LivingRoomPatch;
use crate::validate;

/// Living room section of a report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LivingRoom {
    #[serde(default)]
    pub id: Option<i64>,
    pub report_id: i64,
    pub living_room_name: String,
    pub condition_level: QualityStateType,
    pub room_size: Option<f64>,
    pub wall_state: QualityStateType,
    pub floor_material: Option<String>,
    pub sunlight: Option<String>,
    pub remarks: Option<String>,
}

impl Entity for LivingRoom {
    type Patch = LivingRoomPatch;

    const KIND: EntityKind = EntityKind::LivingRoom;
    const PARENT_KEY: Option<&'static str> = Some("report_id");

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    fn apply_patch(&mut self, patch: LivingRoomPatch) {
        merge_patch!(self, patch;
            required: [report_id, living_room_name, condition_level, wall_state];
            optional: [room_size, floor_material, sunlight, remarks]
        );
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate::required_text("livingRoomName", &self.living_room_name, Some(100))?;
        validate::max_len("floorMaterial", self.floor_material.as_deref(), 100)?;
        validate::max_len("sunlight", self.sunlight.as_deref(), 100)
    }
}
