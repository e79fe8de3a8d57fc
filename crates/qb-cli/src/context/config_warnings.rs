use qb_config::QbConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &QbConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

const SECTIONS: [&str; 3] = ["STORE", "GENERAL", "STUDY"];

fn collect_unconfigured_warnings<I>(config: &QbConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.store.path == qb_config::DEFAULT_STORE_PATH
        && env_keys.iter().any(|key| key == "QBANK_STORE_PATH")
    {
        warnings.push(
            "store.path is the default while QBANK_STORE_PATH is set. Use double underscores (example: QBANK_STORE__PATH)."
                .to_string(),
        );
    }

    for section in SECTIONS {
        let single = format!("QBANK_{section}_");
        let double = format!("QBANK_{section}__");
        let mistyped = env_keys
            .iter()
            .filter(|key| key.starts_with(&single) && !key.starts_with(&double))
            .filter(|key| key.as_str() != "QBANK_STORE_PATH")
            .collect::<Vec<_>>();
        if let Some(key) = mistyped.first() {
            warnings.push(format!(
                "{key} is ignored. Nested config keys use double underscores (example: {double}<FIELD>)."
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use qb_config::{QbConfig, StoreConfig};

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = QbConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&["QBANK_STORE_PATH", "QBANK_GENERAL_DEFAULT_LIMIT"]),
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("QBANK_STORE__PATH"));
        assert!(warnings[1].contains("QBANK_GENERAL_DEFAULT_LIMIT"));
    }

    #[test]
    fn ignores_well_formed_keys_and_log_filter() {
        let config = QbConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&["QBANK_STORE__PATH", "QBANK_STUDY__REVEAL_FIRST_PARAGRAPH_ONLY", "QBANK_LOG"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_when_store_path_is_configured() {
        let config = QbConfig {
            store: StoreConfig {
                path: "/var/lib/qbank.db".to_string(),
            },
            ..Default::default()
        };
        let warnings = collect_unconfigured_warnings(&config, env(&["QBANK_STORE_PATH"]));
        assert!(warnings.is_empty());
    }
}
