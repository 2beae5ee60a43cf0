use mprs_core::enums::EntityKind;
use mprs_db::records::Record;
use mprs_db::service::KindCounts;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::kind::with_record;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CountResponse {
    counts: Vec<KindCounts>,
    in_sync: bool,
}

/// Handle `mprs count [kind]`.
pub async fn handle(
    kind: Option<EntityKind>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let counts = match kind {
        Some(kind) => vec![with_record!(kind, E => count_kind::<E>(ctx).await?)],
        None => ctx.service.counts().await?,
    };
    let in_sync = counts.iter().all(KindCounts::in_sync);
    if !in_sync {
        tracing::warn!("store and index counts differ; run `mprs reindex` to repair");
    }
    output(&CountResponse { counts, in_sync }, flags.format)
}

async fn count_kind<E: Record>(ctx: &AppContext) -> anyhow::Result<KindCounts> {
    let sync = ctx.service.sync::<E>();
    Ok(KindCounts {
        kind: E::KIND,
        store: sync.count_store().await?,
        index: sync.count_index().await?,
    })
}
