//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use mprs_config::{ConfigError, MprsConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_store_and_index_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
path = "data/store.db"

[index]
path = "data/index.db"
"#,
        )?;

        let config: MprsConfig = Figment::from(Serialized::defaults(MprsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.store.path, "data/store.db");
        assert_eq!(config.index.path, "data/index.db");
        assert_eq!(config.general.default_page_size, 20);
        Ok(())
    });
}

#[test]
fn loads_general_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
default_page_size = 50
max_page_size = 500
",
        )?;

        let config: MprsConfig = Figment::from(Serialized::defaults(MprsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_page_size, 50);
        assert_eq!(config.general.max_page_size, 500);
        assert_eq!(config.store.path, ".mprs/store.db");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_figment() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mprs")?;
        jail.create_file(
            ".mprs/config.toml",
            r#"
[store]
path = "project-store.db"
"#,
        )?;

        let config = MprsConfig::load().expect("config loads");
        assert_eq!(config.store.path, "project-store.db");
        assert_eq!(config.index.path, ".mprs/index.db");
        Ok(())
    });
}

#[test]
fn load_from_explicit_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
[index]
path = "elsewhere/index.db"
"#,
        )?;

        let config =
            MprsConfig::load_from(std::path::Path::new("custom.toml")).expect("config loads");
        assert_eq!(config.index.path, "elsewhere/index.db");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("MPRS_STORE__PATH", "from-env.db");

        let config: MprsConfig = Figment::from(Serialized::defaults(MprsConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MPRS_").split("__"))
            .extract()?;

        assert_eq!(config.store.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn env_sets_page_sizes() {
    Jail::expect_with(|jail| {
        jail.set_env("MPRS_GENERAL__DEFAULT_PAGE_SIZE", "5");
        jail.set_env("MPRS_GENERAL__MAX_PAGE_SIZE", "10");

        let config = MprsConfig::load().expect("config loads");
        assert_eq!(config.general.default_page_size, 5);
        assert_eq!(config.general.page_size(Some(99)), 10);
        Ok(())
    });
}

#[test]
fn invalid_merged_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("MPRS_GENERAL__MAX_PAGE_SIZE", "0");

        let err = MprsConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }), "{err}");
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mprs")?;
        jail.create_file(".mprs/config.toml", "[store\npath = ")?;

        let err = MprsConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)), "{err}");
        Ok(())
    });
}
