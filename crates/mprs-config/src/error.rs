//! Errors raised while loading the mprs configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `MPRS_*` variable could not be read or merged.
    #[error("Failed to load mprs config: {0}")]
    Figment(#[from] figment::Error),

    /// A database section (`store` or `index`) has a blank path.
    #[error("[{section}] has no database path (set {section}.path or MPRS_{}__PATH)", .section.to_uppercase())]
    NotConfigured { section: String },

    /// A value that parsed but cannot be used, e.g. `general.max_page_size = 0`.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn not_configured_names_the_env_override() {
        let err = ConfigError::NotConfigured {
            section: "index".into(),
        };
        assert_eq!(
            err.to_string(),
            "[index] has no database path (set index.path or MPRS_INDEX__PATH)"
        );
    }

    #[test]
    fn invalid_value_names_the_field() {
        let err = ConfigError::InvalidValue {
            field: "general.max_page_size".into(),
            reason: "must be at least 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for general.max_page_size: must be at least 1"
        );
    }
}
