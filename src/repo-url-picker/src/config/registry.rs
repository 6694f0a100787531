//! Configured SCM integrations.

use crate::codec::normalize_host;
use crate::integrations::{Integration, IntegrationsError, IntegrationsProvider};
use crate::provider::{ProviderLookup, ProviderType};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// One `[[integrations]]` entry from the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IntegrationEntry {
    /// Hostname the integration serves.
    pub host: String,

    /// Display title (defaults to the host).
    #[serde(default)]
    pub title: Option<String>,

    /// Integration type tag (e.g. "github", "bitbucketCloud").
    #[serde(rename = "type")]
    pub provider: ProviderType,
}

impl IntegrationEntry {
    /// Returns the entry as a selectable integration.
    #[must_use]
    pub fn to_integration(&self) -> Integration {
        Integration {
            host: self.host.clone(),
            title: self.title.clone().unwrap_or_else(|| self.host.clone()),
        }
    }
}

/// In-memory set of integrations keyed by host.
///
/// Serves both as the provider-type lookup and as an integrations provider
/// that resolves immediately.
#[derive(Debug, Clone, Default)]
pub struct IntegrationRegistry {
    entries: Vec<IntegrationEntry>,
}

impl IntegrationRegistry {
    /// Creates a registry from entries, in the order they are offered.
    ///
    /// Hosts are normalized the way decoded values are, so lookups match
    /// whatever spelling the entries were configured with.
    #[must_use]
    pub fn new(mut entries: Vec<IntegrationEntry>) -> Self {
        for entry in &mut entries {
            if let Some(host) = normalize_host(&entry.host) {
                entry.host = host;
            }
        }
        Self { entries }
    }

    /// Returns the entry for `host`, if any.
    #[must_use]
    pub fn by_host(&self, host: &str) -> Option<&IntegrationEntry> {
        let host = normalize_host(host).unwrap_or_else(|| host.to_string());
        self.entries.iter().find(|entry| entry.host == host)
    }

    /// Returns every entry as a selectable integration.
    #[must_use]
    pub fn integrations(&self) -> Vec<Integration> {
        self.entries
            .iter()
            .map(IntegrationEntry::to_integration)
            .collect()
    }
}

impl ProviderLookup for IntegrationRegistry {
    fn provider_type(&self, host: &str) -> Option<ProviderType> {
        self.by_host(host).map(|entry| entry.provider.clone())
    }
}

impl IntegrationsProvider for IntegrationRegistry {
    fn list(&self) -> impl Future<Output = Result<Vec<Integration>, IntegrationsError>> + Send {
        let integrations = self.integrations();
        async move { Ok(integrations) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> IntegrationRegistry {
        IntegrationRegistry::new(vec![
            IntegrationEntry {
                host: "github.com".to_string(),
                title: Some("GitHub".to_string()),
                provider: ProviderType::Github,
            },
            IntegrationEntry {
                host: "bitbucket.org".to_string(),
                title: None,
                provider: ProviderType::Bitbucket,
            },
        ])
    }

    #[test]
    fn looks_up_provider_by_host() {
        let registry = registry();

        assert_eq!(
            registry.provider_type("bitbucket.org"),
            Some(ProviderType::Bitbucket)
        );
        assert_eq!(registry.provider_type("gitlab.com"), None);
    }

    #[test]
    fn title_defaults_to_host() {
        let integrations = registry().integrations();

        assert_eq!(integrations[0].title, "GitHub");
        assert_eq!(integrations[1].title, "bitbucket.org");
    }

    #[test]
    fn lookup_ignores_host_spelling() {
        let registry = IntegrationRegistry::new(vec![
            IntegrationEntry {
                host: "Dev.Azure.com".to_string(),
                title: None,
                provider: ProviderType::Azure,
            },
            IntegrationEntry {
                host: "gitlab.example.com:443".to_string(),
                title: None,
                provider: ProviderType::Gitlab,
            },
        ]);

        assert_eq!(registry.provider_type("dev.azure.com"), Some(ProviderType::Azure));
        assert_eq!(registry.provider_type("DEV.AZURE.COM"), Some(ProviderType::Azure));
        assert_eq!(
            registry.provider_type("gitlab.example.com"),
            Some(ProviderType::Gitlab)
        );
        assert_eq!(registry.integrations()[0].host, "dev.azure.com");
    }

    #[tokio::test]
    async fn lists_entries_in_order() {
        let hosts: Vec<String> = registry()
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|integration| integration.host)
            .collect();

        assert_eq!(hosts, ["github.com", "bitbucket.org"]);
    }
}
