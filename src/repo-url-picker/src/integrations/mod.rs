//! Available SCM integrations and the host picker options built from them.

mod error;
mod host_option;

pub use error::IntegrationsError;
pub use host_option::{HostOption, LOADING_VALUE};

use crate::codec::normalize_host;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// An SCM integration the user can pick as host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Integration {
    /// Hostname of the integration.
    pub host: String,

    /// Display title.
    pub title: String,
}

/// Asynchronous source of available integrations.
pub trait IntegrationsProvider {
    /// Loads the available integrations.
    fn list(&self) -> impl Future<Output = Result<Vec<Integration>, IntegrationsError>> + Send;
}

/// Keeps only the integrations whose host is in `allowed_hosts`.
///
/// `None` means every integration is allowed. Hosts are compared after
/// normalization. Order follows `integrations`.
#[must_use]
pub fn filter_integrations(
    integrations: &[Integration],
    allowed_hosts: Option<&[String]>,
) -> Vec<Integration> {
    integrations
        .iter()
        .filter(|integration| {
            allowed_hosts.map_or(true, |hosts| {
                hosts.iter().any(|host| same_host(host, &integration.host))
            })
        })
        .cloned()
        .collect()
}

fn same_host(a: &str, b: &str) -> bool {
    match (normalize_host(a), normalize_host(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

/// Builds the host picker options.
///
/// `None` means integrations are still loading, which yields a single
/// disabled placeholder.
#[must_use]
pub fn host_options(integrations: Option<&[Integration]>) -> Vec<HostOption> {
    match integrations {
        None => vec![HostOption::loading()],
        Some(integrations) => integrations
            .iter()
            .map(|integration| HostOption {
                label: integration.title.clone(),
                value: integration.host.clone(),
                disabled: false,
            })
            .collect(),
    }
}
