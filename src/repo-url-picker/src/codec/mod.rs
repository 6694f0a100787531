//! Conversion between the serialized repository location and [`FieldSet`].
//!
//! The serialized form is `<host>?owner=<o>&repo=<r>&organization=<g>&workspace=<w>&project=<p>`
//! with every query parameter optional. It is the only value handed to the
//! enclosing form and to downstream scaffolding steps.

mod error;

pub(crate) use error::DecodeError;

use crate::fields::{non_empty, FieldSet};
use url::{form_urlencoded, Url};

/// Query parameter names, in the order the encoder writes them.
pub const QUERY_KEYS: [&str; 5] = ["owner", "repo", "organization", "workspace", "project"];

/// Decodes a serialized repository location.
///
/// Never fails: an absent or unparseable value yields an empty [`FieldSet`].
/// When the value carries no owner, the first entry of `allowed_owners` is
/// used instead.
///
/// # Arguments
///
/// * `value` - The serialized location held by the form, if any
/// * `allowed_owners` - Closed list of owners configured for the field
#[must_use]
pub fn decode(value: Option<&str>, allowed_owners: Option<&[String]>) -> FieldSet {
    let mut fields = match value.map(try_decode) {
        Some(Ok(fields)) => fields,
        Some(Err(_)) | None => FieldSet::default(),
    };

    if fields.owner.is_none() {
        fields.owner = allowed_owners.and_then(<[String]>::first).cloned();
    }

    fields
}

/// Parses `value` as the authority and query of an https URL.
///
/// Hostnames are normalized the way [`Url`] normalizes them (lowercase,
/// punycode), and an explicit port is kept as part of the host.
pub(crate) fn try_decode(value: &str) -> Result<FieldSet, DecodeError> {
    let url = Url::parse(&format!("https://{value}"))?;
    let host = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or(DecodeError::MissingHost)?;
    let host = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    let mut fields = FieldSet::with_host(host);
    for (key, value) in url.query_pairs() {
        let slot = match key.as_ref() {
            "owner" => &mut fields.owner,
            "repo" => &mut fields.repo,
            "organization" => &mut fields.organization,
            "workspace" => &mut fields.workspace,
            "project" => &mut fields.project,
            _ => continue,
        };
        // First occurrence wins.
        if slot.is_none() {
            *slot = non_empty(value.into_owned());
        }
    }

    Ok(fields)
}

/// Normalizes a bare hostname the way [`decode`] does.
///
/// Returns `None` if `host` is not a bare `host[:port]` authority.
#[must_use]
pub fn normalize_host(host: &str) -> Option<String> {
    if host.contains(['/', '?', '#', '@']) {
        return None;
    }
    try_decode(host).ok()?.host
}

/// Encodes a field set into its serialized form.
///
/// Returns `None` when no host is set, which tells the form the location is
/// incomplete. Otherwise the non-empty optional fields are appended as query
/// parameters in the order of [`QUERY_KEYS`].
#[must_use]
pub fn encode(fields: &FieldSet) -> Option<String> {
    let host = fields.host.as_deref().filter(|host| !host.is_empty())?;

    let values = [
        &fields.owner,
        &fields.repo,
        &fields.organization,
        &fields.workspace,
        &fields.project,
    ];

    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in QUERY_KEYS.iter().zip(values) {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            query.append_pair(key, value);
        }
    }

    Some(format!("{host}?{}", query.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldEdit;

    fn owners(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn decodes_host_owner_and_repo() {
        let fields = decode(Some("github.com?owner=acme&repo=widgets"), None);

        assert_eq!(
            fields,
            FieldSet {
                host: Some("github.com".to_string()),
                owner: Some("acme".to_string()),
                repo: Some("widgets".to_string()),
                organization: None,
                workspace: None,
                project: None,
            }
        );
    }

    #[test]
    fn encodes_in_fixed_order() {
        let fields = FieldSet::with_host("dev.azure.com")
            .apply(FieldEdit::Organization("org1".into()))
            .apply(FieldEdit::Repo("r1".into()));

        assert_eq!(
            encode(&fields).as_deref(),
            Some("dev.azure.com?repo=r1&organization=org1")
        );
    }

    #[test]
    fn encode_without_host_is_none() {
        let fields = FieldSet {
            owner: Some("acme".into()),
            repo: Some("widgets".into()),
            ..Default::default()
        };
        assert_eq!(encode(&fields), None);
        assert_eq!(encode(&FieldSet::default()), None);
    }

    #[test]
    fn encode_host_only_keeps_separator() {
        assert_eq!(
            encode(&FieldSet::with_host("gitlab.com")).as_deref(),
            Some("gitlab.com?")
        );
    }

    #[test]
    fn round_trips_every_field() {
        let fields = FieldSet {
            host: Some("bitbucket.org".into()),
            owner: Some("team a".into()),
            repo: Some("my&repo".into()),
            organization: Some("org=1".into()),
            workspace: Some("ws".into()),
            project: Some("PRJ".into()),
        };

        let encoded = encode(&fields).unwrap();
        assert_eq!(decode(Some(&encoded), None), fields);
    }

    #[test]
    fn round_trips_host_with_port() {
        let fields = FieldSet::with_host("git.internal:8443").apply(FieldEdit::Repo("svc".into()));
        let encoded = encode(&fields).unwrap();
        assert_eq!(decode(Some(&encoded), None), fields);
    }

    #[test]
    fn absent_value_backfills_owner() {
        let fields = decode(None, Some(owners(&["acme"]).as_slice()));

        assert_eq!(fields.owner.as_deref(), Some("acme"));
        assert_eq!(fields.host, None);
    }

    #[test]
    fn explicit_owner_is_not_replaced() {
        let fields = decode(
            Some("github.com?owner=other&repo=r"),
            Some(owners(&["acme", "beta"]).as_slice()),
        );
        assert_eq!(fields.owner.as_deref(), Some("other"));
    }

    #[test]
    fn unparseable_value_falls_back_to_empty() {
        assert!(decode(Some(""), None).is_empty());
        assert!(decode(Some("exa mple.com?repo=x"), None).is_empty());
        assert!(decode(Some("[::1?repo=x"), None).is_empty());
    }

    #[test]
    fn normalizes_hosts_like_decode() {
        assert_eq!(normalize_host("Dev.Azure.com").as_deref(), Some("dev.azure.com"));
        assert_eq!(normalize_host("dev.azure.com:443").as_deref(), Some("dev.azure.com"));
        assert_eq!(normalize_host("git.internal:8443").as_deref(), Some("git.internal:8443"));
        assert_eq!(normalize_host("github.com/acme"), None);
        assert_eq!(normalize_host("git hub.com"), None);
        assert_eq!(normalize_host(""), None);
    }

    #[test]
    fn normalized_host_round_trips() {
        let host = normalize_host("GitHub.com").unwrap();
        let fields = FieldSet::with_host(host).apply(FieldEdit::Repo("widgets".into()));

        let encoded = encode(&fields).unwrap();
        assert_eq!(decode(Some(&encoded), None), fields);
    }

    #[test]
    fn try_decode_reports_the_failure() {
        assert!(matches!(try_decode(""), Err(DecodeError::InvalidUrl(_))));
    }

    #[test]
    fn empty_parameters_decode_as_absent() {
        let fields = decode(Some("github.com?owner=&repo=widgets"), None);
        assert_eq!(fields.owner, None);
        assert_eq!(fields.repo.as_deref(), Some("widgets"));
    }

    #[test]
    fn first_duplicate_parameter_wins() {
        let fields = decode(Some("github.com?repo=first&repo=second"), None);
        assert_eq!(fields.repo.as_deref(), Some("first"));
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let fields = decode(Some("gitlab.com?owner=a&branch=main&repo=b"), None);
        assert_eq!(encode(&fields).as_deref(), Some("gitlab.com?owner=a&repo=b"));
    }
}
