//! Credential error types.

use thiserror::Error;

/// Errors a credential service can report.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The service could not produce a token.
    #[error("Credentials unavailable for '{url}': {message}")]
    Unavailable { url: String, message: String },

    /// The user or the provider refused the request.
    #[error("Credential request denied for '{url}'")]
    Denied { url: String },
}
