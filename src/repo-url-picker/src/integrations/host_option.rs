//! Options offered by the host picker.

use serde::Serialize;

/// Value of the placeholder shown while integrations load.
pub const LOADING_VALUE: &str = "loading";

/// A single entry in the host picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostOption {
    /// Text shown to the user.
    pub label: String,

    /// Host written into the field set when selected.
    pub value: String,

    /// Whether the option can be selected.
    pub disabled: bool,
}

impl HostOption {
    /// The disabled placeholder shown before integrations have loaded.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            label: "Loading...".to_string(),
            value: LOADING_VALUE.to_string(),
            disabled: true,
        }
    }
}
