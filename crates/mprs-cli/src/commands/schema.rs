use mprs_core::entity::Entity;
use schemars::JsonSchema;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::commands::shared::kind::with_record;
use crate::output::output;

/// Handle `mprs schema <kind> [--patch]`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    with_record!(args.kind, E => {
        let schema = if args.patch {
            schema_of::<<E as Entity>::Patch>()
        } else {
            schema_of::<E>()
        };
        output(&schema, flags.format)
    })
}

fn schema_of<T: JsonSchema>() -> schemars::Schema {
    schemars::schema_for!(T)
}
