//! Single-field edits coming from the UI.

/// A user edit to one input of the picker.
///
/// Carries the raw input text; an empty string clears the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Host(String),
    Owner(String),
    Repo(String),
    Organization(String),
    Workspace(String),
    Project(String),
}

impl FieldEdit {
    /// Returns true if this edit targets the host picker.
    #[must_use]
    pub fn is_host(&self) -> bool {
        matches!(self, Self::Host(_))
    }
}
