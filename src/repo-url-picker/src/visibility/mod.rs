//! Decides which inputs the picker shows for the selected host.

use crate::provider::{ProviderType, BITBUCKET_CLOUD_HOST};
use serde::Serialize;

/// How a namespace or name input is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputKind {
    /// Not shown.
    Hidden,

    /// Free-text input.
    FreeText,

    /// Closed choice from a configured list.
    Choice {
        /// Selectable values, in configured order.
        options: Vec<String>,
    },
}

impl InputKind {
    /// Returns true unless the input is hidden.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    fn restricted_to(allowed: Option<&[String]>) -> Self {
        match allowed {
            Some(options) if !options.is_empty() => Self::Choice {
                options: options.to_vec(),
            },
            _ => Self::FreeText,
        }
    }
}

/// The subset of inputs shown for the current selection.
///
/// The host picker is always shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleFields {
    pub owner: InputKind,
    pub repo: InputKind,
    pub organization: bool,
    pub workspace: bool,
    pub project: bool,
}

impl VisibleFields {
    const HOST_ONLY: Self = Self {
        owner: InputKind::Hidden,
        repo: InputKind::Hidden,
        organization: false,
        workspace: false,
        project: false,
    };
}

/// Selects the visible inputs for a host and its provider type.
///
/// | host | provider  | shown |
/// |------|-----------|-------|
/// | none | any       | host picker only |
/// | set  | azure     | organization, repo |
/// | set  | bitbucket | project, repo, plus workspace on Bitbucket Cloud |
/// | set  | other     | owner, repo |
///
/// `allowed_owners` and `allowed_repos` turn the owner and repo inputs into
/// closed choices when non-empty.
#[must_use]
pub fn select_fields(
    host: Option<&str>,
    provider: Option<&ProviderType>,
    allowed_owners: Option<&[String]>,
    allowed_repos: Option<&[String]>,
) -> VisibleFields {
    let repo = InputKind::restricted_to(allowed_repos);

    match (host, provider) {
        (None, _) => VisibleFields::HOST_ONLY,
        (Some(_), Some(ProviderType::Azure)) => VisibleFields {
            organization: true,
            repo,
            ..VisibleFields::HOST_ONLY
        },
        (Some(host), Some(ProviderType::Bitbucket)) => VisibleFields {
            workspace: host == BITBUCKET_CLOUD_HOST,
            project: true,
            repo,
            ..VisibleFields::HOST_ONLY
        },
        (Some(_), _) => VisibleFields {
            owner: InputKind::restricted_to(allowed_owners),
            repo,
            ..VisibleFields::HOST_ONLY
        },
    }
}
