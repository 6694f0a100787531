//! Per-field options recognized by the picker.

use crate::config::ConfigError;
use crate::provider::ProviderType;
use serde::{Deserialize, Serialize};

/// Options attached to a single picker field.
///
/// Every list is optional: absent means unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PickerConfig {
    /// Hosts offered in the host picker.
    #[serde(default)]
    pub allowed_hosts: Option<Vec<String>>,

    /// Owners offered as a closed choice instead of free text.
    #[serde(default)]
    pub allowed_owners: Option<Vec<String>>,

    /// Repository names offered as a closed choice instead of free text.
    #[serde(default)]
    pub allowed_repos: Option<Vec<String>>,

    /// Captures a credential for the selected repository when present.
    #[serde(default, alias = "requestUserCredentials")]
    pub with_credentials: Option<CredentialOptions>,
}

/// Where to store a captured credential and which extra scopes to request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CredentialOptions {
    /// Key the token is stored under in the secrets context.
    #[serde(alias = "secretsKey")]
    pub key: String,

    /// Extra scopes to request, per provider.
    #[serde(default)]
    pub additional_scopes: AdditionalScopes,
}

/// Additional OAuth scopes per provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdditionalScopes {
    pub azure: Vec<String>,
    pub bitbucket: Vec<String>,
    pub gerrit: Vec<String>,
    pub github: Vec<String>,
    pub gitlab: Vec<String>,
}

impl AdditionalScopes {
    /// Returns the scopes configured for `provider`.
    #[must_use]
    pub fn for_provider(&self, provider: Option<&ProviderType>) -> &[String] {
        match provider {
            Some(ProviderType::Azure) => &self.azure,
            Some(ProviderType::Bitbucket) => &self.bitbucket,
            Some(ProviderType::Gerrit) => &self.gerrit,
            Some(ProviderType::Github) => &self.github,
            Some(ProviderType::Gitlab) => &self.gitlab,
            _ => &[],
        }
    }
}

impl PickerConfig {
    /// Parses options from the JSON object a form schema attaches to the field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::JsonError`] if the JSON does not match the options shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::JsonError { source })
    }

    /// Checks that configured lists are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for empty restriction lists,
    /// blank entries or a blank credential key.
    pub fn validate(&self, path: &str) -> Result<(), ConfigError> {
        let lists = [
            ("allowedHosts", &self.allowed_hosts),
            ("allowedOwners", &self.allowed_owners),
            ("allowedRepos", &self.allowed_repos),
        ];

        for (name, list) in lists {
            let Some(list) = list else { continue };
            if list.is_empty() {
                return Err(ConfigError::ValidationError {
                    path: path.to_string(),
                    message: format!("{name} must not be empty when present"),
                });
            }
            if list.iter().any(|entry| entry.trim().is_empty()) {
                return Err(ConfigError::ValidationError {
                    path: path.to_string(),
                    message: format!("{name} contains a blank entry"),
                });
            }
        }

        if let Some(credentials) = &self.with_credentials {
            if credentials.key.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    path: path.to_string(),
                    message: "withCredentials.key must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_options() {
        let config = PickerConfig::from_json(
            r#"{
                "allowedHosts": ["github.com", "dev.azure.com"],
                "allowedOwners": ["acme"],
                "withCredentials": { "key": "USER_OAUTH_TOKEN" }
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.allowed_hosts,
            Some(vec!["github.com".to_string(), "dev.azure.com".to_string()])
        );
        assert_eq!(config.allowed_owners, Some(vec!["acme".to_string()]));
        assert_eq!(config.allowed_repos, None);
        assert_eq!(config.with_credentials.unwrap().key, "USER_OAUTH_TOKEN");
    }

    #[test]
    fn accepts_request_user_credentials_alias() {
        let config = PickerConfig::from_json(
            r#"{
                "requestUserCredentials": {
                    "secretsKey": "TOKEN",
                    "additionalScopes": { "github": ["workflow"] }
                }
            }"#,
        )
        .unwrap();

        let credentials = config.with_credentials.unwrap();
        assert_eq!(credentials.key, "TOKEN");
        assert_eq!(
            credentials
                .additional_scopes
                .for_provider(Some(&ProviderType::Github)),
            ["workflow".to_string()]
        );
        assert!(credentials
            .additional_scopes
            .for_provider(Some(&ProviderType::Gitlab))
            .is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let result = PickerConfig::from_json(r#"{ "allowedOwners": "acme" }"#);
        assert!(matches!(result, Err(ConfigError::JsonError { .. })));
    }

    #[test]
    fn rejects_misspelled_options() {
        let result = PickerConfig::from_json(r#"{ "alowedHosts": ["github.com"] }"#);
        assert!(matches!(result, Err(ConfigError::JsonError { .. })));

        let result = PickerConfig::from_json(r#"{ "withCredentials": { "key": "T", "scopes": [] } }"#);
        assert!(matches!(result, Err(ConfigError::JsonError { .. })));
    }

    #[test]
    fn validate_rejects_empty_lists() {
        let config = PickerConfig {
            allowed_owners: Some(Vec::new()),
            ..Default::default()
        };

        let result = config.validate("inline");
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn validate_rejects_blank_credential_key() {
        let config = PickerConfig {
            with_credentials: Some(CredentialOptions {
                key: "  ".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert!(config.validate("inline").is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(PickerConfig::default().validate("inline").is_ok());
    }
}
