use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::enums::EntityKind;
use crate::errors::CoreError;
use crate::merge_patch;
use crate::patches::EnvFactorPatch;
use crate::validate;

/// Environmental factor near the property (noise source, view, facility).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvFactor {
    #[serde(default)]
    pub id: Option<i64>,
    pub report_id: i64,
    pub env_factor_name: String,
    pub env_factor_distance: Option<f64>,
    pub remarks: Option<String>,
}

impl Entity for EnvFactor {
    type Patch = EnvFactorPatch;

    const KIND: EntityKind = EntityKind::EnvFactor;
    const PARENT_KEY: Option<&'static str> = Some("report_id");

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    fn apply_patch(&mut self, patch: EnvFactorPatch) {
        merge_patch!(self, patch;
            required: [report_id, env_factor_name];
            optional: [env_factor_distance, remarks]
        );
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate::required_text("envFactorName", &self.env_factor_name, Some(100))
    }
}
