//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default page size for list/search commands.
const fn default_page_size() -> u32 {
    20
}

const fn default_max_page_size() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Page size used when the caller does not pass one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Upper bound for any requested page size.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl GeneralConfig {
    /// Resolve a requested page size: fall back to the default, then clamp
    /// into `1..=max_page_size`.
    pub fn page_size(&self, requested: Option<u32>) -> u32 {
        let max = self.max_page_size.max(1);
        requested.unwrap_or(self.default_page_size).clamp(1, max)
    }
}
