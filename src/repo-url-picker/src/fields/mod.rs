//! Structured representation of a repository location.

mod edit;

pub use edit::FieldEdit;

use serde::Serialize;

/// The decoded, structured form of a repository location value.
///
/// A `FieldSet` has no identity of its own. It is rebuilt from the serialized
/// value every time it is needed and written back through
/// [`encode`](crate::codec::encode) after every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldSet {
    /// SCM hostname (e.g. "github.com").
    pub host: Option<String>,

    /// User, organization or project namespace.
    pub owner: Option<String>,

    /// Repository name.
    pub repo: Option<String>,

    /// Azure DevOps organization.
    pub organization: Option<String>,

    /// Bitbucket Cloud workspace.
    pub workspace: Option<String>,

    /// Bitbucket project.
    pub project: Option<String>,
}

impl FieldSet {
    /// Creates a field set with only the host set.
    #[must_use]
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            ..Default::default()
        }
    }

    /// Returns true if every field is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns a copy with a single edit applied.
    ///
    /// Empty input clears the field.
    #[must_use]
    pub fn apply(mut self, edit: FieldEdit) -> Self {
        let (slot, value) = match edit {
            FieldEdit::Host(value) => (&mut self.host, value),
            FieldEdit::Owner(value) => (&mut self.owner, value),
            FieldEdit::Repo(value) => (&mut self.repo, value),
            FieldEdit::Organization(value) => (&mut self.organization, value),
            FieldEdit::Workspace(value) => (&mut self.workspace, value),
            FieldEdit::Project(value) => (&mut self.project, value),
        };
        *slot = non_empty(value);
        self
    }

    /// Returns `(host, owner, repo)` when all three are present and non-empty.
    #[must_use]
    pub fn repository_triple(&self) -> Option<(&str, &str, &str)> {
        let host = self.host.as_deref().filter(|s| !s.is_empty())?;
        let owner = self.owner.as_deref().filter(|s| !s.is_empty())?;
        let repo = self.repo.as_deref().filter(|s| !s.is_empty())?;
        Some((host, owner, repo))
    }
}

/// Maps empty strings to `None`.
pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
