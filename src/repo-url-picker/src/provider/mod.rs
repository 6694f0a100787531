//! SCM provider classification.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Hostname of the public Bitbucket Cloud service.
pub const BITBUCKET_CLOUD_HOST: &str = "bitbucket.org";

/// The kind of SCM integration configured for a host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderType {
    Azure,
    /// Bitbucket Cloud and Bitbucket Server/Data Center.
    Bitbucket,
    Gerrit,
    Gitea,
    Github,
    Gitlab,
    /// Any integration type this crate has no special handling for.
    Other(String),
}

impl ProviderType {
    /// Returns the canonical tag for this provider type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Azure => "azure",
            Self::Bitbucket => "bitbucket",
            Self::Gerrit => "gerrit",
            Self::Gitea => "gitea",
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for ProviderType {
    fn from(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "azure" => Self::Azure,
            "bitbucket" | "bitbucketcloud" | "bitbucketserver" => Self::Bitbucket,
            "gerrit" => Self::Gerrit,
            "gitea" => Self::Gitea,
            "github" => Self::Github,
            "gitlab" => Self::Gitlab,
            _ => Self::Other(tag.to_string()),
        }
    }
}

impl From<String> for ProviderType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<ProviderType> for String {
    fn from(provider: ProviderType) -> Self {
        provider.as_str().to_string()
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the provider type configured for a host.
pub trait ProviderLookup {
    /// Returns the provider type for `host`, or `None` if the host is unknown.
    fn provider_type(&self, host: &str) -> Option<ProviderType>;
}

impl ProviderLookup for HashMap<String, ProviderType> {
    fn provider_type(&self, host: &str) -> Option<ProviderType> {
        self.get(host).cloned()
    }
}

impl<L: ProviderLookup + ?Sized> ProviderLookup for &L {
    fn provider_type(&self, host: &str) -> Option<ProviderType> {
        (**self).provider_type(host)
    }
}
