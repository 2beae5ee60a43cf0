use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::enums::{EntityKind, QualityStateType};
use crate::errors::CoreError;
use crate::merge_patch;
use crate::patches::KitchenPatch;
use crate::validate;

/// Kitchen section of a report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Kitchen {
    #[serde(default)]
    pub id: Option<i64>,
    pub report_id: i64,
    pub kitchen_name: String,
    pub condition_level: QualityStateType,
    pub built_in_cabinet: Option<String>,
    pub sink_condition: QualityStateType,
    pub ventilation_system: Option<String>,
    pub appliance_provision: Option<String>,
    pub remarks: Option<String>,
}

impl Entity for Kitchen {
    type Patch = KitchenPatch;

    const KIND: EntityKind = EntityKind::Kitchen;
    const PARENT_KEY: Option<&'static str> = Some("report_id");

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    fn apply_patch(&mut self, patch: KitchenPatch) {
        merge_patch!(self, patch;
            required: [report_id, kitchen_name, condition_level, sink_condition];
            optional: [built_in_cabinet, ventilation_system, appliance_provision, remarks]
        );
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate::required_text("kitchenName", &self.kitchen_name, Some(100))?;
        validate::flag("builtInCabinet", self.built_in_cabinet.as_deref())?;
        validate::max_len("ventilationSystem", self.ventilation_system.as_deref(), 100)?;
        validate::max_len("applianceProvision", self.appliance_provision.as_deref(), 100)
    }
}
