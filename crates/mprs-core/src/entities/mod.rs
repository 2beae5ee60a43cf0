//! Entity structs for every record kind.
//!
//! Each entity maps to one store table and one search table. All structs
//! derive `Serialize`, `Deserialize` and `JsonSchema`; JSON field names are
//! camelCase.

mod author;
mod bathroom;
mod bedroom;
mod entrance;
mod env_factor;
mod infrastructure;
mod kitchen;
mod living_room;
mod report;

pub use author::Author;
pub use bathroom::Bathroom;
pub use bedroom::Bedroom;
pub use entrance::Entrance;
pub use env_factor::EnvFactor;
pub use infrastructure::Infrastructure;
pub use kitchen::Kitchen;
pub use living_room::LivingRoom;
pub use report::Report;
