use mprs_db::records::Record;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::page::page_spec;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mprs list <kind>`: a store page, optionally narrowed to one parent.
pub async fn run<E: Record>(
    args: &ListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let spec = page_spec(args.page, ctx.page_size(flags), args.sort.as_deref())?;
    let sync = ctx.service.sync::<E>();
    let page = match args.parent {
        Some(parent_id) => sync.find_by_parent(parent_id, &spec).await?,
        None => sync.list_all(&spec).await?,
    };
    output(&page, flags.format)
}
