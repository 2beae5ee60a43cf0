use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::enums::EntityKind;
use crate::errors::CoreError;
use crate::merge_patch;
use crate::patches::AuthorPatch;
use crate::validate;

/// Person who wrote an inspection report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub contact_info: String,
}

impl Entity for Author {
    type Patch = AuthorPatch;

    const KIND: EntityKind = EntityKind::Author;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    fn apply_patch(&mut self, patch: AuthorPatch) {
        merge_patch!(self, patch; required: [name, contact_info]; optional: []);
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate::required_text("name", &self.name, None)?;
        validate::required_text("contactInfo", &self.contact_info, None)
    }
}
