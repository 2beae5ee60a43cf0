use mprs_core::enums::EntityKind;
use mprs_db::records::Record;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    kind: EntityKind,
    id: i64,
    deleted: bool,
}

pub async fn run<E: Record>(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.sync::<E>().delete(id).await?;
    output(
        &DeleteResponse {
            kind: E::KIND,
            id,
            deleted: true,
        },
        flags.format,
    )
}
