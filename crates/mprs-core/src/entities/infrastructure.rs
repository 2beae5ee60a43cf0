use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::enums::{EntityKind, InfraType, QualityStateType};
use crate::errors::CoreError;
use crate::merge_patch;
use crate::patches::InfrastructurePatch;
use crate::validate;

/// Nearby infrastructure facility (school, transport, shops).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Infrastructure {
    #[serde(default)]
    pub id: Option<i64>,
    pub report_id: i64,
    pub infra_type: InfraType,
    pub infra_name: String,
    pub condition_level: QualityStateType,
    pub infra_distance: Option<i32>,
    pub infra_distance_unit: Option<QualityStateType>,
    pub remarks: Option<String>,
}

impl Entity for Infrastructure {
    type Patch = InfrastructurePatch;

    const KIND: EntityKind = EntityKind::Infrastructure;
    const PARENT_KEY: Option<&'static str> = Some("report_id");

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    fn apply_patch(&mut self, patch: InfrastructurePatch) {
        merge_patch!(self, patch;
            required: [report_id, infra_type, infra_name, condition_level];
            optional: [infra_distance, infra_distance_unit, remarks]
        );
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate::required_text("infraName", &self.infra_name, Some(200))
    }
}
