//! Cross-cutting error types for qbank.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `ConfigError`) are defined in
//! their respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any qbank crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (form-level constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a `NotFound` error.
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
