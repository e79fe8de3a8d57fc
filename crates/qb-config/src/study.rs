//! Study-mode configuration.

use serde::{Deserialize, Serialize};

const fn default_reveal_first_paragraph_only() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StudyConfig {
    /// Show only the answer's first paragraph when a quiz card is revealed.
    #[serde(default = "default_reveal_first_paragraph_only")]
    pub reveal_first_paragraph_only: bool,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            reveal_first_paragraph_only: default_reveal_first_paragraph_only(),
        }
    }
}
