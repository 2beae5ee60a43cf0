use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::enums::{EntityKind, QualityStateType};
use crate::errors::CoreError;
use crate::merge_patch;
use crate::patches::BedroomPatch;
use crate::validate;

/// Bedroom section of a report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bedroom {
    #[serde(default)]
    pub id: Option<i64>,
    pub report_id: i64,
    pub bedroom_name: String,
    pub condition_level: QualityStateType,
    pub room_size: Option<f64>,
    pub closet_yn: Option<String>,
    pub ac_yn: Option<String>,
    pub window_location: Option<String>,
    pub window_size: Option<String>,
    pub remarks: Option<String>,
}

impl Entity for Bedroom {
    type Patch = BedroomPatch;

    const KIND: EntityKind = EntityKind::Bedroom;
    const PARENT_KEY: Option<&'static str> = Some("report_id");

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    fn apply_patch(&mut self, patch: BedroomPatch) {
        merge_patch!(self, patch;
            required: [report_id, bedroom_name, condition_level];
            optional: [room_size, closet_yn, ac_yn, window_location, window_size, remarks]
        );
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate::required_text("bedroomName", &self.bedroom_name, Some(100))?;
        validate::flag("closetYn", self.closet_yn.as_deref())?;
        validate::flag("acYn", self.ac_yn.as_deref())?;
        validate::max_len("windowLocation", self.window_location.as_deref(), 100)?;
        validate::max_len("windowSize", self.window_size.as_deref(), 100)
    }
}
