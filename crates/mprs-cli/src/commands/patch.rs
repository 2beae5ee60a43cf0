use mprs_core::entity::Entity;
use mprs_db::boundary;
use mprs_db::records::Record;

use crate::cli::GlobalFlags;
use crate::commands::shared::body::parse_patch_body;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mprs patch <kind> <id> --data <json>`. Only the fields present in
/// the body change.
pub async fn run<E: Record>(
    id: i64,
    data: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (body_id, patch) = parse_patch_body::<<E as Entity>::Patch>(data, E::KIND)?;
    let patched = boundary::patch(ctx.service.sync::<E>(), id, body_id, patch).await?;
    output(&patched, flags.format)
}
