//! Search index database configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_index_path() -> String {
    ".mprs/index.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Path of the FTS5 index database, or `:memory:`. Kept separate from
    /// the store so the index can be dropped and rebuilt.
    #[serde(default = "default_index_path")]
    pub path: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            path: default_index_path(),
        }
    }
}

impl IndexConfig {
    pub fn is_configured(&self) -> bool {
        !self.path.trim().is_empty()
    }

    pub fn parent_dir(&self) -> Option<PathBuf> {
        if self.path == ":memory:" {
            return None;
        }
        PathBuf::from(&self.path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
    }
}
