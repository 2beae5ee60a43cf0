//! Store database configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_store_path() -> String {
    ".mprs/store.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the authoritative libSQL database, or `:memory:`.
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl StoreConfig {
    pub fn is_configured(&self) -> bool {
        !self.path.trim().is_empty()
    }

    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// Directory that must exist before the database file can be created.
    /// `None` for in-memory databases and bare file names.
    pub fn parent_dir(&self) -> Option<PathBuf> {
        if self.is_in_memory() {
            return None;
        }
        PathBuf::from(&self.path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_into_project_dir() {
        let config = StoreConfig::default();
        assert!(config.is_configured());
        assert_eq!(config.path, ".mprs/store.db");
        assert_eq!(config.parent_dir(), Some(PathBuf::from(".mprs")));
    }

    #[test]
    fn memory_has_no_parent() {
        let config = StoreConfig {
            path: ":memory:".into(),
        };
        assert!(config.is_in_memory());
        assert_eq!(config.parent_dir(), None);
    }

    #[test]
    fn bare_file_has_no_parent() {
        let config = StoreConfig {
            path: "store.db".into(),
        };
        assert_eq!(config.parent_dir(), None);
    }

    #[test]
    fn blank_path_is_not_configured() {
        let config = StoreConfig { path: "  ".into() };
        assert!(!config.is_configured());
    }
}
