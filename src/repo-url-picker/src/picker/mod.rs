//! The repository location picker.
//!
//! [`RepoUrlPicker`] holds the serialized value owned by the enclosing form
//! and turns UI events into new values. Side effects (credential capture) are
//! returned as data in a [`PickerUpdate`] and run by the caller.

mod view;

pub use view::PickerView;

use crate::codec::{decode, encode, normalize_host};
use crate::config::PickerConfig;
use crate::credentials::CredentialRequest;
use crate::fields::{FieldEdit, FieldSet};
use crate::integrations::{
    filter_integrations, host_options, Integration, IntegrationsError, IntegrationsProvider,
};
use crate::provider::{ProviderLookup, ProviderType};
use crate::validation::FieldErrors;
use crate::visibility::{select_fields, VisibleFields};
use tracing::{debug, warn};

/// Result of an event that changed the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerUpdate {
    /// New serialized value for the form (`None` while no host is chosen).
    pub value: Option<String>,

    /// Credential request to run, if one was triggered.
    pub credential_request: Option<CredentialRequest>,
}

/// Headless model of one repository location field.
#[derive(Debug, Clone)]
pub struct RepoUrlPicker<L> {
    config: PickerConfig,
    lookup: L,
    value: Option<String>,
    /// Filtered integrations; `None` until loaded.
    integrations: Option<Vec<Integration>>,
}

impl<L: ProviderLookup> RepoUrlPicker<L> {
    /// Creates a picker for the form's current `value`.
    pub fn new(config: PickerConfig, lookup: L, value: Option<String>) -> Self {
        Self {
            config,
            lookup,
            value,
            integrations: None,
        }
    }

    /// Returns the current serialized value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Decodes the current value.
    pub fn fields(&self) -> FieldSet {
        decode(self.value.as_deref(), self.config.allowed_owners.as_deref())
    }

    /// Returns the inputs to show for the current value.
    pub fn visible_fields(&self) -> VisibleFields {
        let fields = self.fields();
        let provider = self.provider_for(&fields);
        self.select(&fields, provider.as_ref())
    }

    /// Returns the integrations offered as hosts, or `None` while loading.
    pub fn integrations(&self) -> Option<&[Integration]> {
        self.integrations.as_deref()
    }

    /// Applies a user edit and returns the new value.
    ///
    /// An edit to the host that leaves host, owner and repo all set also
    /// triggers credential capture when configured.
    pub fn edit(&mut self, edit: FieldEdit) -> PickerUpdate {
        let host_changed = edit.is_host();
        let fields = self.fields().apply(edit);
        self.commit(fields, host_changed)
    }

    /// Handles the repository input losing focus.
    ///
    /// Returns the credential request to run, if capture is configured and
    /// the location is complete.
    pub fn blur_repo(&self) -> Option<CredentialRequest> {
        self.credential_request(&self.fields())
    }

    /// Records newly loaded integrations and applies the default host.
    ///
    /// Integrations are filtered to the allowed hosts. When no host is chosen
    /// yet, the first remaining integration becomes the host and the new
    /// value is returned. A host already chosen is never replaced.
    pub fn integrations_loaded(&mut self, integrations: &[Integration]) -> Option<PickerUpdate> {
        let filtered = filter_integrations(integrations, self.config.allowed_hosts.as_deref());
        debug!(
            loaded = integrations.len(),
            offered = filtered.len(),
            "Integrations loaded"
        );

        let default_host = filtered.first().map(|integration| {
            normalize_host(&integration.host).unwrap_or_else(|| integration.host.clone())
        });
        self.integrations = Some(filtered);

        let fields = self.fields();
        if fields.host.is_some() {
            return None;
        }

        let host = default_host?;
        debug!(host = %host, "Selecting default host");
        Some(self.commit(fields.apply(FieldEdit::Host(host)), true))
    }

    /// Loads integrations from `provider` and applies the default host.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`IntegrationsError`]; the picker keeps showing
    /// the loading placeholder in that case.
    pub async fn load_integrations<P: IntegrationsProvider>(
        &mut self,
        provider: &P,
    ) -> Result<Option<PickerUpdate>, IntegrationsError> {
        match provider.list().await {
            Ok(integrations) => Ok(self.integrations_loaded(&integrations)),
            Err(e) => {
                warn!(error = %e, "Failed to load integrations");
                Err(e)
            }
        }
    }

    /// Builds the render model, reflecting the form's error flags.
    pub fn view(&self, errors: FieldErrors) -> PickerView {
        let fields = self.fields();
        let provider = self.provider_for(&fields);
        let visible = self.select(&fields, provider.as_ref());

        PickerView {
            loading: self.integrations.is_none(),
            host_options: host_options(self.integrations.as_deref()),
            fields,
            provider,
            visible,
            errors,
        }
    }

    fn provider_for(&self, fields: &FieldSet) -> Option<ProviderType> {
        fields
            .host
            .as_deref()
            .and_then(|host| self.lookup.provider_type(host))
    }

    fn select(&self, fields: &FieldSet, provider: Option<&ProviderType>) -> VisibleFields {
        select_fields(
            fields.host.as_deref(),
            provider,
            self.config.allowed_owners.as_deref(),
            self.config.allowed_repos.as_deref(),
        )
    }

    fn commit(&mut self, fields: FieldSet, host_changed: bool) -> PickerUpdate {
        let credential_request = if host_changed {
            self.credential_request(&fields)
        } else {
            None
        };

        self.value = encode(&fields);
        PickerUpdate {
            value: self.value.clone(),
            credential_request,
        }
    }

    fn credential_request(&self, fields: &FieldSet) -> Option<CredentialRequest> {
        let options = self.config.with_credentials.as_ref()?;
        let (host, owner, repo) = fields.repository_triple()?;
        let provider = self.lookup.provider_type(host);
        let scopes = options.additional_scopes.for_provider(provider.as_ref());

        debug!(host = %host, key = %options.key, "Credential capture triggered");
        Some(CredentialRequest::for_repository(
            host,
            owner,
            repo,
            options.key.clone(),
            scopes.to_vec(),
        ))
    }
}
