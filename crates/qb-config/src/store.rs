//! Question store configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Path used when neither TOML nor env sets one.
pub const DEFAULT_STORE_PATH: &str = ".qbank/qbank.db";

fn default_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// libSQL database file, or `:memory:` for a throwaway store.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl StoreConfig {
    /// Whether the store lives only in memory.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// Reject an empty path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StoreConfig::default();
        assert_eq!(config.path, ".qbank/qbank.db");
        assert!(!config.is_in_memory());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_path_is_rejected() {
        let config = StoreConfig { path: "  ".into() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
