//! General application configuration.

use qb_core::enums::{JobSortBy, QuestionSortField, SortDirection};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

/// Days counted as "recent" on the dashboard.
const fn default_recent_window_days() -> u32 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Window for the dashboard's "recently added" and "studied this week" counts.
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: u32,

    /// Question sort field when `--sort` is not given.
    #[serde(default)]
    pub default_sort_field: QuestionSortField,

    /// Question sort direction when `--order` is not given.
    #[serde(default)]
    pub default_sort_direction: SortDirection,

    /// Job sort field when `--sort` is not given.
    #[serde(default)]
    pub default_job_sort: JobSortBy,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            recent_window_days: default_recent_window_days(),
            default_sort_field: QuestionSortField::default(),
            default_sort_direction: SortDirection::default(),
            default_job_sort: JobSortBy::default(),
        }
    }
}

impl GeneralConfig {
    /// Reject a zero limit or window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.recent_window_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.recent_window_days".into(),
                reason: "must be at least 1".into(),
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
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.recent_window_days, 7);
        assert_eq!(config.default_sort_field, QuestionSortField::LastReviewed);
        assert_eq!(config.default_sort_direction, SortDirection::Desc);
        assert_eq!(config.default_job_sort, JobSortBy::Date);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let config = GeneralConfig {
            default_limit: 0,
            ..GeneralConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
