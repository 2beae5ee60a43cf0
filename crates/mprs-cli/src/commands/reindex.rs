use mprs_core::enums::EntityKind;
use mprs_db::records::Record;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::kind::with_record;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ReindexEntry {
    kind: EntityKind,
    documents: u64,
}

/// Handle `mprs reindex [kind]`: rebuild the search index from the store.
pub async fn handle(
    kind: Option<EntityKind>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let rebuilt = match kind {
        Some(kind) => vec![(kind, with_record!(kind, E => reindex_kind::<E>(ctx).await?))],
        None => ctx.service.reindex_all().await?,
    };
    let entries = rebuilt
        .into_iter()
        .map(|(kind, documents)| ReindexEntry { kind, documents })
        .collect::<Vec<_>>();
    output(&entries, flags.format)
}

async fn reindex_kind<E: Record>(ctx: &AppContext) -> anyhow::Result<u64> {
    Ok(ctx.service.sync::<E>().reindex().await?)
}
