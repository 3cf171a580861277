//! URL validation, joining and naming helpers shared by the locator and the
//! archive builder.

mod label;
mod path;
mod sanitize;

pub use label::host_label;
pub use path::{last_path_segment, split_extension};
pub use sanitize::sanitize_file_stem;

use crate::error::{Error, Result};
use url::Url;

/// Parses `input` as an absolute URL with a non-empty scheme and host.
///
/// Strings without a scheme (`example.com`) and hostless URLs
/// (`data:`, `mailto:`, `file:///x`) are rejected.
pub fn parse_absolute(input: &str) -> Result<Url> {
    let parsed = Url::parse(input).map_err(|e| Error::InvalidUrl {
        url: input.to_string(),
        reason: match e {
            url::ParseError::RelativeUrlWithoutBase => "missing scheme",
            url::ParseError::EmptyHost => "missing host",
            _ => "malformed URL",
        },
    })?;
    if !has_host(&parsed) {
        return Err(Error::InvalidUrl {
            url: input.to_string(),
            reason: "missing host",
        });
    }
    Ok(parsed)
}

/// Joins `reference` onto `base` and keeps the result only if it is a valid
/// absolute URL with a host.
///
/// Handles relative paths, root-relative paths, protocol-relative
/// `//host/...` references and already-absolute URLs.
pub fn resolve(base: &Url, reference: &str) -> Option<Url> {
    let joined = base.join(reference).ok()?;
    has_host(&joined).then_some(joined)
}

fn has_host(url: &Url) -> bool {
    url.host_str().is_some_and(|h| !h.is_empty())
}
