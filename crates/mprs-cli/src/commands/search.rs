use mprs_core::paging::PageSpec;
use mprs_db::records::Record;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mprs search <kind> [query]`. Results come from the index, ranked
/// by relevance.
pub async fn run<E: Record>(
    args: &SearchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let spec = PageSpec::new(args.page, ctx.page_size(flags));
    let query = args.query.as_deref().unwrap_or_default();
    let page = ctx.service.sync::<E>().search(query, &spec).await?;
    output(&page, flags.format)
}
