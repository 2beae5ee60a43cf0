use std::path::Path;

use anyhow::Context;
use mprs_config::MprsConfig;
use mprs_db::service::ReportService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: ReportService,
    pub config: MprsConfig,
}

impl AppContext {
    /// Load configuration and open the store and index databases.
    pub async fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = load_config(flags)?;
        super::warn_unconfigured(&config);

        tracing::debug!(
            store = %config.store.path,
            index = %config.index.path,
            "opening report service"
        );
        let service = ReportService::from_config(&config)
            .await
            .context("failed to open store and index databases")?;

        Ok(Self { service, config })
    }

    /// Page size for list/search after applying the configured default and cap.
    #[must_use]
    pub fn page_size(&self, flags: &GlobalFlags) -> u32 {
        self.config.general.page_size(flags.size)
    }
}

fn load_config(flags: &GlobalFlags) -> anyhow::Result<MprsConfig> {
    match &flags.config {
        Some(path) => MprsConfig::load_from(Path::new(path))
            .with_context(|| format!("failed to load config file at {path}")),
        None => MprsConfig::load_with_dotenv().context("failed to load configuration"),
    }
}
