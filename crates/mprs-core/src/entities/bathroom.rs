use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::enums::{EntityKind, QualityStateType};
use crate::errors::CoreError;
use crate::merge_patch;
use crate::patches::BathroomPatch;
use crate::validate;

/// Bathroom section of a report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bathroom {
    #[serde(default)]
    pub id: Option<i64>,
    pub report_id: i64,
    pub bathroom_name: String,
    pub condtion_level: QualityStateType,
    pub bathroom_size: Option<f64>,
    pub water_pressure: QualityStateType,
    pub shower_booth_presence: Option<String>,
    pub bathtub_presence: Option<String>,
    pub floor_and_ceiling: QualityStateType,
    pub remarks: Option<String>,
}

impl Entity for Bathroom {
    type Patch = BathroomPatch;

    const KIND: EntityKind = EntityKind::Bathroom;
    const PARENT_KEY: Option<&'static str> = Some("report_id");

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    fn apply_patch(&mut self, patch: BathroomPatch) {
        merge_patch!(self, patch;
            required: [report_id, bathroom_name, condtion_level, water_pressure, floor_and_ceiling];
            optional: [bathroom_size, shower_booth_presence, bathtub_presence, remarks]
        );
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate::required_text("bathroomName", &self.bathroom_name, Some(100))?;
        validate::flag("showerBoothPresence", self.shower_booth_presence.as_deref())?;
        validate::flag("bathtubPresence", self.bathtub_presence.as_deref())
    }
}
