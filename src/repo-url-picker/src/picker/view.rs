//! Render model of the picker.

use crate::fields::FieldSet;
use crate::integrations::HostOption;
use crate::provider::ProviderType;
use crate::validation::FieldErrors;
use crate::visibility::VisibleFields;
use serde::Serialize;

/// Everything a UI needs to draw the picker for the current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerView {
    /// Whether integrations are still loading.
    pub loading: bool,

    /// Options of the host picker.
    pub host_options: Vec<HostOption>,

    /// Current decoded values.
    pub fields: FieldSet,

    /// Provider type of the selected host, if known.
    pub provider: Option<ProviderType>,

    /// Inputs to show.
    pub visible: VisibleFields,

    /// Error flags supplied by the form.
    pub errors: FieldErrors,
}
