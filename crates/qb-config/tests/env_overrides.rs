use figment::Jail;
use qb_config::{ConfigError, QbConfig};

#[test]
fn env_overrides_store_path() {
    Jail::expect_with(|jail| {
        jail.set_env("QBANK_STORE__PATH", ":memory:");
        let config = QbConfig::load().expect("config loads");
        assert_eq!(config.store.path, ":memory:");
        assert!(config.store.is_in_memory());
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".qbank")?;
        jail.create_file(
            ".qbank/config.toml",
            r#"
[general]
default_limit = 10
"#,
        )?;
        jail.set_env("QBANK_GENERAL__DEFAULT_LIMIT", "99");

        let config = QbConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 99);
        Ok(())
    });
}

#[test]
fn zero_window_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("QBANK_GENERAL__RECENT_WINDOW_DAYS", "0");
        let err = QbConfig::load().expect_err("zero window is invalid");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
