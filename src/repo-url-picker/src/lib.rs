#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod codec;
pub mod config;
pub mod credentials;
pub mod fields;
pub mod integrations;
pub mod picker;
pub mod provider;
pub mod validation;
pub mod visibility;

pub use codec::{decode, encode, normalize_host};
pub use config::{
    load_settings, AdditionalScopes, ConfigError, CredentialOptions, IntegrationEntry,
    IntegrationRegistry, PickerConfig, Settings, SettingsFile,
};
pub use credentials::{
    CaptureOutcome, CredentialCapture, CredentialError, CredentialRequest, CredentialService,
    SecretsContext,
};
pub use fields::{FieldEdit, FieldSet};
pub use integrations::{
    filter_integrations, host_options, HostOption, Integration, IntegrationsError,
    IntegrationsProvider,
};
pub use picker::{PickerUpdate, PickerView, RepoUrlPicker};
pub use provider::{ProviderLookup, ProviderType, BITBUCKET_CLOUD_HOST};
pub use validation::{validate, FieldErrors, FieldName, ValidationIssue};
pub use visibility::{select_fields, InputKind, VisibleFields};
