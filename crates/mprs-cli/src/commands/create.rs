use mprs_db::boundary;
use mprs_db::records::Record;

use crate::cli::GlobalFlags;
use crate::commands::shared::body::parse_body;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mprs create <kind> --data <json>`.
pub async fn run<E: Record>(data: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entity: E = parse_body(data, E::KIND)?;
    let created = boundary::create(ctx.service.sync::<E>(), entity).await?;
    output(&created, flags.format)
}
