use mprs_core::paging::{PageSpec, SortOrder};

/// Build a page request from the `--page`, resolved size and `--sort` args.
pub fn page_spec(page: u32, size: u32, sort: Option<&str>) -> anyhow::Result<PageSpec> {
    let spec = PageSpec::new(page, size);
    Ok(match sort {
        Some(raw) => spec.sorted_by(SortOrder::parse(raw)?),
        None => spec,
    })
}
