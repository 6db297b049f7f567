use crate::error::{Result, ShortenerError};
use url::Url;

/// Checks whether a string is acceptable as a shortening target.
///
/// The input must parse as an absolute URL and use the `http` or `https`
/// scheme. Nothing else is checked: no DNS lookup, no reachability probe.
///
/// `Url::parse` normalizes the scheme to lowercase, so `HTTP://...` is
/// accepted.
pub fn validate_url(input: &str) -> Result<()> {
    let url = Url::parse(input)
        .map_err(|e| ShortenerError::InvalidUrl(format!("failed to parse '{input}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ShortenerError::InvalidUrl(format!(
            "scheme must be http or https, got '{other}'"
        ))),
    }
}
