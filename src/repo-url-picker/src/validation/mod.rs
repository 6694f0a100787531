//! Completeness checks for a serialized repository location.
//!
//! The enclosing form runs [`validate`] and hands the resulting
//! [`FieldErrors`] back to the picker, which only reflects them.

use crate::codec::try_decode;
use crate::provider::{ProviderLookup, ProviderType, BITBUCKET_CLOUD_HOST};
use serde::Serialize;

/// Identifies one picker input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Host,
    Owner,
    Repo,
    Organization,
    Workspace,
    Project,
}

impl FieldName {
    /// Returns the query parameter name (or "host").
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Owner => "owner",
            Self::Repo => "repo",
            Self::Organization => "organization",
            Self::Workspace => "workspace",
            Self::Project => "project",
        }
    }
}

/// A problem found in a serialized location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// The input the problem belongs to.
    pub field: FieldName,

    /// Message shown to the user.
    pub message: String,
}

impl ValidationIssue {
    fn missing(field: FieldName) -> Self {
        Self {
            field,
            message: format!(
                "Incomplete repository location provided, {} not provided",
                field.as_str()
            ),
        }
    }
}

/// Checks that a serialized location names every field its provider requires.
///
/// Owner backfilling does not apply here: the value is checked exactly as the
/// form would submit it.
#[must_use]
pub fn validate<L: ProviderLookup>(value: Option<&str>, lookup: &L) -> Vec<ValidationIssue> {
    let Some(value) = value else {
        return vec![ValidationIssue::missing(FieldName::Host)];
    };

    let fields = match try_decode(value) {
        Ok(fields) => fields,
        Err(_) => {
            return vec![ValidationIssue {
                field: FieldName::Host,
                message: "Unable to parse the repository location".to_string(),
            }]
        }
    };

    let Some(host) = fields.host.as_deref() else {
        return vec![ValidationIssue::missing(FieldName::Host)];
    };

    let mut required = Vec::new();
    match lookup.provider_type(host) {
        Some(ProviderType::Bitbucket) => {
            if host == BITBUCKET_CLOUD_HOST {
                required.push((FieldName::Workspace, &fields.workspace));
            }
            required.push((FieldName::Project, &fields.project));
        }
        Some(ProviderType::Azure) => required.push((FieldName::Organization, &fields.organization)),
        Some(ProviderType::Gerrit) => {}
        _ => required.push((FieldName::Owner, &fields.owner)),
    }
    required.push((FieldName::Repo, &fields.repo));

    required
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| ValidationIssue::missing(field))
        .collect()
}

/// Per-input error flags shown by the picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub host: bool,
    pub owner: bool,
    pub repo: bool,
    pub organization: bool,
    pub workspace: bool,
    pub project: bool,
}

impl FieldErrors {
    /// Flags every input that has at least one issue.
    #[must_use]
    pub fn from_issues(issues: &[ValidationIssue]) -> Self {
        let mut errors = Self::default();
        for issue in issues {
            errors.set(issue.field);
        }
        errors
    }

    /// Flags `field` as erroneous.
    pub fn set(&mut self, field: FieldName) {
        *self.slot(field) = true;
    }

    /// Returns whether `field` is flagged.
    #[must_use]
    pub fn has_error(&self, field: FieldName) -> bool {
        match field {
            FieldName::Host => self.host,
            FieldName::Owner => self.owner,
            FieldName::Repo => self.repo,
            FieldName::Organization => self.organization,
            FieldName::Workspace => self.workspace,
            FieldName::Project => self.project,
        }
    }

    /// Returns true if any input is flagged.
    #[must_use]
    pub fn any(&self) -> bool {
        *self != Self::default()
    }

    fn slot(&mut self, field: FieldName) -> &mut bool {
        match field {
            FieldName::Host => &mut self.host,
            FieldName::Owner => &mut self.owner,
            FieldName::Repo => &mut self.repo,
            FieldName::Organization => &mut self.organization,
            FieldName::Workspace => &mut self.workspace,
            FieldName::Project => &mut self.project,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup() -> HashMap<String, ProviderType> {
        HashMap::from([
            ("github.com".to_string(), ProviderType::Github),
            ("dev.azure.com".to_string(), ProviderType::Azure),
            ("bitbucket.org".to_string(), ProviderType::Bitbucket),
            ("bitbucket.corp.example".to_string(), ProviderType::Bitbucket),
            ("review.example".to_string(), ProviderType::Gerrit),
        ])
    }

    fn fields(issues: &[ValidationIssue]) -> Vec<FieldName> {
        issues.iter().map(|issue| issue.field).collect()
    }

    #[test]
    fn complete_github_location_is_valid() {
        let issues = validate(Some("github.com?owner=acme&repo=widgets"), &lookup());
        assert!(issues.is_empty());
    }

    #[test]
    fn absent_value_misses_host() {
        let issues = validate(None, &lookup());

        assert_eq!(fields(&issues), [FieldName::Host]);
        assert_eq!(
            issues[0].message,
            "Incomplete repository location provided, host not provided"
        );
    }

    #[test]
    fn unparseable_value_is_reported() {
        let issues = validate(Some("exa mple.com"), &lookup());
        assert_eq!(issues[0].message, "Unable to parse the repository location");
    }

    #[test]
    fn github_requires_owner_and_repo() {
        let issues = validate(Some("github.com?"), &lookup());
        assert_eq!(fields(&issues), [FieldName::Owner, FieldName::Repo]);
    }

    #[test]
    fn azure_requires_organization_instead_of_owner() {
        let issues = validate(Some("dev.azure.com?repo=r1"), &lookup());
        assert_eq!(fields(&issues), [FieldName::Organization]);
    }

    #[test]
    fn bitbucket_cloud_requires_workspace_and_project() {
        let issues = validate(Some("bitbucket.org?repo=r"), &lookup());
        assert_eq!(fields(&issues), [FieldName::Workspace, FieldName::Project]);
    }

    #[test]
    fn bitbucket_server_requires_project_only() {
        let issues = validate(Some("bitbucket.corp.example?repo=r"), &lookup());
        assert_eq!(fields(&issues), [FieldName::Project]);
    }

    #[test]
    fn gerrit_does_not_require_owner() {
        let issues = validate(Some("review.example?repo=r"), &lookup());
        assert!(issues.is_empty());
    }

    #[test]
    fn unknown_host_requires_owner() {
        let issues = validate(Some("git.example.com?repo=r"), &lookup());
        assert_eq!(fields(&issues), [FieldName::Owner]);
    }

    #[test]
    fn field_errors_from_issues() {
        let issues = validate(Some("bitbucket.org?"), &lookup());
        let errors = FieldErrors::from_issues(&issues);

        assert!(errors.any());
        assert!(errors.has_error(FieldName::Workspace));
        assert!(errors.has_error(FieldName::Project));
        assert!(errors.has_error(FieldName::Repo));
        assert!(!errors.has_error(FieldName::Owner));
        assert!(!FieldErrors::default().any());
    }
}
