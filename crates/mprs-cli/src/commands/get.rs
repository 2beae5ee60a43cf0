use mprs_db::error::SyncError;
use mprs_db::records::Record;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run<E: Record>(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entity = ctx
        .service
        .sync::<E>()
        .find_one(id)
        .await?
        .ok_or_else(|| SyncError::not_found(E::KIND, id))?;
    output(&entity, flags.format)
}
