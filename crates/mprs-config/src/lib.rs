//! # mprs-config
//!
//! Layered configuration loading for MPRS using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MPRS_*` prefix, `__` as separator)
//! 2. Project-level `.mprs/config.toml`
//! 3. User-level `~/.config/mprs/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MPRS_STORE__PATH` -> `store.path`,
//! `MPRS_GENERAL__MAX_PAGE_SIZE` -> `general.max_page_size`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mprs_config::MprsConfig;
//!
//! let config = MprsConfig::load_with_dotenv().expect("config");
//! println!("store at {}", config.store.path);
//! ```

mod error;
mod general;
mod index;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use index::IndexConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MprsConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MprsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` on malformed sources and
    /// `ConfigError::InvalidValue` when the merged values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Load using an explicit project config file instead of `.mprs/config.toml`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let figment = Self::base_figment()
            .merge(Toml::file(path))
            .merge(Env::prefixed("MPRS_").split("__"));
        Self::from_figment(&figment)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Self::base_figment();

        let local_path = PathBuf::from(".mprs/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("MPRS_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` for a blank database path and
    /// `ConfigError::InvalidValue` for an unusable page size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.store.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "store".into(),
            });
        }
        if !self.index.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "index".into(),
            });
        }
        if self.store.path == self.index.path && !self.store.is_in_memory() {
            return Err(ConfigError::InvalidValue {
                field: "index.path".into(),
                reason: "must differ from store.path".into(),
            });
        }
        if self.general.max_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.max_page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus the user-global file.
    fn base_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }
        figment
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mprs").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Missing files are ignored.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MprsConfig::default();
        config.validate().unwrap();
        assert_eq!(config.store.path, ".mprs/store.db");
        assert_eq!(config.index.path, ".mprs/index.db");
        assert_eq!(config.general.default_page_size, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: MprsConfig = MprsConfig::figment().extract()?;
            assert_eq!(config.general.max_page_size, 100);
            Ok(())
        });
    }

    #[test]
    fn shared_path_is_rejected() {
        let mut config = MprsConfig::default();
        config.index.path = config.store.path.clone();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn both_in_memory_is_allowed() {
        let mut config = MprsConfig::default();
        config.store.path = ":memory:".into();
        config.index.path = ":memory:".into();
        config.validate().unwrap();
    }

    #[test]
    fn blank_store_is_not_configured() {
        let mut config = MprsConfig::default();
        config.store.path = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }
}
