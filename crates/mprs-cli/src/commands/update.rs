use mprs_db::boundary;
use mprs_db::records::Record;

use crate::cli::GlobalFlags;
use crate::commands::shared::body::parse_body;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mprs update <kind> <id> --data <json>`. Optional fields left out of
/// the body are cleared.
pub async fn run<E: Record>(
    id: i64,
    data: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let entity: E = parse_body(data, E::KIND)?;
    let updated = boundary::update(ctx.service.sync::<E>(), id, entity).await?;
    output(&updated, flags.format)
}
