//! Settings loading.
//!
//! A settings file describes the available SCM integrations and the options
//! of the picker field:
//!
//! ```toml
//! [picker]
//! allowedHosts = ["github.com", "dev.azure.com"]
//! allowedOwners = ["acme"]
//!
//! [picker.withCredentials]
//! key = "USER_OAUTH_TOKEN"
//!
//! [[integrations]]
//! host = "github.com"
//! title = "GitHub"
//! type = "github"
//! ```

mod error;
mod options;
mod registry;

pub use error::ConfigError;
pub use options::{AdditionalScopes, CredentialOptions, PickerConfig};
pub use registry::{IntegrationEntry, IntegrationRegistry};

use crate::codec::normalize_host;
use crate::integrations::{Integration, IntegrationsError, IntegrationsProvider};
use serde::Deserialize;
use std::collections::HashSet;
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Contents of a settings file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Options for the picker field.
    #[serde(default)]
    pub picker: PickerConfig,

    /// Available SCM integrations, in display order.
    #[serde(default)]
    pub integrations: Vec<IntegrationEntry>,
}

impl Settings {
    /// Parses and validates settings from TOML text.
    ///
    /// `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the TOML is malformed or fails validation.
    pub fn parse(content: &str, path: &str) -> Result<Self, ConfigError> {
        let mut settings: Self = toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: path.to_string(),
            source: e,
        })?;
        settings.normalize_hosts(path)?;
        settings.validate(path)?;
        Ok(settings)
    }

    /// Builds the integration registry described by these settings.
    #[must_use]
    pub fn registry(&self) -> IntegrationRegistry {
        IntegrationRegistry::new(self.integrations.clone())
    }

    /// Rewrites every configured host into the form decoded values use.
    fn normalize_hosts(&mut self, path: &str) -> Result<(), ConfigError> {
        for entry in &mut self.integrations {
            entry.host = normalized(&entry.host, path)?;
        }
        if let Some(hosts) = &mut self.picker.allowed_hosts {
            for host in hosts.iter_mut() {
                *host = normalized(host, path)?;
            }
        }
        Ok(())
    }

    fn validate(&self, path: &str) -> Result<(), ConfigError> {
        self.picker.validate(path)?;

        let mut seen = HashSet::new();
        for entry in &self.integrations {
            if !seen.insert(entry.host.as_str()) {
                return Err(ConfigError::ValidationError {
                    path: path.to_string(),
                    message: format!("duplicate integration host '{}'", entry.host),
                });
            }
        }

        Ok(())
    }
}

fn normalized(host: &str, path: &str) -> Result<String, ConfigError> {
    normalize_host(host).ok_or_else(|| ConfigError::ValidationError {
        path: path.to_string(),
        message: format!("invalid host '{host}'"),
    })
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if the file doesn't exist, or another
/// [`ConfigError`] if it can't be read, parsed or validated.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    info!(path = %path.display(), "Loading settings");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let settings = Settings::parse(&content, &path.display().to_string())?;
    debug!(
        integrations = settings.integrations.len(),
        "Loaded settings"
    );
    Ok(settings)
}

/// Integrations provider that re-reads a settings file on every load.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    /// Creates a provider backed by the file at `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the settings file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IntegrationsProvider for SettingsFile {
    fn list(&self) -> impl Future<Output = Result<Vec<Integration>, IntegrationsError>> + Send {
        read_integrations(self.path.clone())
    }
}

async fn read_integrations(path: PathBuf) -> Result<Vec<Integration>, IntegrationsError> {
    let display = path.display().to_string();
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| ConfigError::IoError {
            path: display.clone(),
            source: e,
        })?;
    let settings = Settings::parse(&content, &display)?;
    Ok(settings.registry().integrations())
}
