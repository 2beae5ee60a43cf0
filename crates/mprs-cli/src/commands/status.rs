use mprs_core::enums::EntityKind;
use mprs_db::records::Record;
use mprs_db::sync::SyncState;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StatusResponse {
    kind: EntityKind,
    id: i64,
    state: SyncState,
}

pub async fn run<E: Record>(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.service.sync::<E>().sync_state(id).await?;
    output(
        &StatusResponse {
            kind: E::KIND,
            id,
            state,
        },
        flags.format,
    )
}
