//! # qb-config
//!
//! Layered configuration loading for qbank using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QBANK_*` prefix, `__` as separator)
//! 2. Project-level `.qbank/config.toml`
//! 3. User-level `~/.config/qbank/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QBANK_STORE__PATH` -> `store.path`,
//! `QBANK_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use qb_config::QbConfig;
//!
//! let config = QbConfig::load_with_dotenv().expect("config");
//! println!("store at {}", config.store.path);
//! ```

mod error;
mod general;
mod store;
mod study;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::{DEFAULT_STORE_PATH, StoreConfig};
pub use study::StudyConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QbConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub study: StudyConfig,
}

impl QbConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".qbank/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("QBANK_").split("__"))
    }

    /// Check every section for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()?;
        self.general.validate()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("qbank").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = QbConfig::default();
        assert_eq!(config.store.path, DEFAULT_STORE_PATH);
        assert_eq!(config.general.default_limit, 20);
        assert!(config.study.reveal_first_paragraph_only);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: QbConfig = QbConfig::figment().extract()?;
            assert_eq!(config.store.path, DEFAULT_STORE_PATH);
            assert_eq!(config.general.recent_window_days, 7);
            Ok(())
        });
    }
}
