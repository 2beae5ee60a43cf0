use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::enums::{EntityKind, QualityStateType};
use crate::errors::CoreError;
use crate::merge_patch;
use crate::patches::EntrancePatch;
use crate::validate;

/// Entrance (hallway) section of a report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entrance {
    #[serde(default)]
    pub id: Option<i64>,
    pub report_id: i64,
    pub entrance_name: String,
    pub condtion_level: QualityStateType,
    pub entrance_size: Option<f64>,
    pub shoe_rack_size: Option<f64>,
    pub pantry_presence: Option<String>,
    pub remarks: Option<String>,
}

impl Entity for Entrance {
    type Patch = EntrancePatch;

    const KIND: EntityKind = EntityKind::Entrance;
    const PARENT_KEY: Option<&'static str> = Some("report_id");

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    fn apply_patch(&mut self, patch: EntrancePatch) {
        merge_patch!(self, patch;
            required: [report_id, entrance_name, condtion_level];
            optional: [entrance_size, shoe_rack_size, pantry_presence, remarks]
        );
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate::required_text("entranceName", &self.entrance_name, Some(100))?;
        validate::flag("pantryPresence", self.pantry_presence.as_deref())
    }
}
