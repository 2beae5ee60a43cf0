use mprs_config::{IndexConfig, MprsConfig, StoreConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &MprsConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &MprsConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.store.path == StoreConfig::default().path
        && has_single_underscore_key(&env_keys, "MPRS_STORE")
    {
        warnings.push(
            "Store path is the default while MPRS_STORE_* env vars exist. Use double underscores (example: MPRS_STORE__PATH)."
                .to_string(),
        );
    }

    if config.index.path == IndexConfig::default().path
        && has_single_underscore_key(&env_keys, "MPRS_INDEX")
    {
        warnings.push(
            "Index path is the default while MPRS_INDEX_* env vars exist. Use double underscores (example: MPRS_INDEX__PATH)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "MPRS_GENERAL") {
        warnings.push(
            "MPRS_GENERAL_* env vars are ignored. Use double underscores (example: MPRS_GENERAL__MAX_PAGE_SIZE)."
                .to_string(),
        );
    }

    warnings
}

/// `MPRS_STORE_PATH` style keys: the section prefix followed by one underscore.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use mprs_config::MprsConfig;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = MprsConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("MPRS_STORE_PATH".to_string(), "/tmp/s.db".to_string()),
                ("MPRS_INDEX_PATH".to_string(), "/tmp/i.db".to_string()),
                ("MPRS_GENERAL_MAX_PAGE_SIZE".to_string(), "5".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn does_not_warn_for_double_underscore_keys() {
        let config = MprsConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("MPRS_STORE__PATH".to_string(), "/tmp/s.db".to_string()),
                ("MPRS_GENERAL__MAX_PAGE_SIZE".to_string(), "5".to_string()),
                ("MPRS_LOG".to_string(), "debug".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_when_path_was_changed() {
        let mut config = MprsConfig::default();
        config.store.path = "/data/store.db".to_string();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("MPRS_STORE_PATH".to_string(), "/tmp/s.db".to_string())],
        );

        assert!(warnings.is_empty());
    }
}
