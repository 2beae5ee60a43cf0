//! Partial-update payloads.
//!
//! One `<Kind>Patch` per entity. Absent fields deserialize to `None` and are
//! left untouched by `Entity::apply_patch`. There is no way to clear a field
//! through a patch; use a full update for that.

mod author;
mod bathroom;
mod bedroom;
mod entrance;
mod env_factor;
mod infrastructure;
mod kitchen;
mod living_room;
mod report;

pub use author::AuthorPatch;
pub use bathroom::BathroomPatch;
pub use bedroom::BedroomPatch;
pub use entrance::EntrancePatch;
pub use env_factor::EnvFactorPatch;
pub use infrastructure::InfrastructurePatch;
pub use kitchen::KitchenPatch;
pub use living_room::LivingRoomPatch;
pub use report::ReportPatch;
