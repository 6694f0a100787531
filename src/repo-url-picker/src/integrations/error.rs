//! Integration loading error types.

use thiserror::Error;

/// Errors that can occur while loading the available integrations.
#[derive(Debug, Error)]
pub enum IntegrationsError {
    /// The integrations source failed.
    #[error("Failed to load integrations: {message}")]
    LoadFailed { message: String },

    /// The settings backing the integrations are invalid.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}
