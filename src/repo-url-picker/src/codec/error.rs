//! Decode error types.

use thiserror::Error;

/// Reasons a serialized value could not be parsed.
///
/// Never leaves the crate: [`decode`](super::decode) falls back to an empty
/// field set when parsing fails.
#[derive(Debug, Error)]
pub(crate) enum DecodeError {
    /// The value is not a valid `host?query` string.
    #[error("Invalid repository location: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The value parsed but carries no host.
    #[error("Repository location has no host")]
    MissingHost,
}
