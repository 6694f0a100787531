//! Credential capture for the selected repository.
//!
//! When a picker is configured with a credential key, the token returned by a
//! [`CredentialService`] for the selected repository is stored in a
//! [`SecretsContext`] under that key.

mod error;
mod secrets;

pub use error::CredentialError;
pub use secrets::SecretsContext;

use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// A request for a token scoped to one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialRequest {
    /// Repository URL the token must grant access to.
    pub url: String,

    /// Key the token is stored under.
    pub secret_key: String,

    /// Extra scopes to request from the provider.
    pub additional_scopes: Vec<String>,
}

impl CredentialRequest {
    /// Builds a request for `https://{host}/{owner}/{repo}`.
    #[must_use]
    pub fn for_repository(
        host: &str,
        owner: &str,
        repo: &str,
        secret_key: impl Into<String>,
        additional_scopes: Vec<String>,
    ) -> Self {
        Self {
            url: format!("https://{host}/{owner}/{repo}"),
            secret_key: secret_key.into(),
            additional_scopes,
        }
    }
}

/// Issues tokens for repository URLs.
pub trait CredentialService {
    /// Requests a token for `request.url`.
    fn request_token(
        &self,
        request: &CredentialRequest,
    ) -> impl Future<Output = Result<String, CredentialError>> + Send;
}

/// What happened to a captured token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The token was written to the secrets context.
    Stored,

    /// A newer request was issued while this one was in flight; the token was dropped.
    Stale {
        /// Sequence number of the dropped request.
        sequence: u64,
    },
}

/// Runs credential requests and stores their tokens.
///
/// Every request gets a sequence number. A response is stored only if no
/// newer request was started in the meantime, so a slow response can never
/// overwrite the token of a later selection.
#[derive(Debug)]
pub struct CredentialCapture<S> {
    service: S,
    secrets: SecretsContext,
    latest: AtomicU64,
}

impl<S: CredentialService> CredentialCapture<S> {
    /// Creates a capture that writes into `secrets`.
    pub fn new(service: S, secrets: SecretsContext) -> Self {
        Self {
            service,
            secrets,
            latest: AtomicU64::new(0),
        }
    }

    /// Returns the secrets context tokens are written to.
    pub fn secrets(&self) -> &SecretsContext {
        &self.secrets
    }

    /// Requests a token and stores it unless a newer request superseded it.
    ///
    /// # Errors
    ///
    /// Returns the service's [`CredentialError`] unchanged.
    pub async fn capture(
        &self,
        request: &CredentialRequest,
    ) -> Result<CaptureOutcome, CredentialError> {
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            url = %request.url,
            key = %request.secret_key,
            sequence,
            "Requesting credentials"
        );

        let token = self.service.request_token(request).await?;

        if self.latest.load(Ordering::SeqCst) != sequence {
            warn!(
                url = %request.url,
                sequence,
                "Discarding credentials from superseded request"
            );
            return Ok(CaptureOutcome::Stale { sequence });
        }

        self.secrets.set(request.secret_key.clone(), token);
        debug!(key = %request.secret_key, sequence, "Stored credentials");
        Ok(CaptureOutcome::Stored)
    }
}
