//! Filename pieces taken from a URL path.

use url::Url;

/// Text after the final `/` of the URL path. Empty when the path ends in `/`.
///
/// Query and fragment are not part of the path.
pub fn last_path_segment(url: &Url) -> &str {
    url.path().rsplit('/').next().unwrap_or_default()
}

/// Splits `name` at its last dot into `(base, extension)`; the extension
/// keeps its dot.
///
/// A dot that only has dots before it does not start an extension, so
/// `.hidden` has none. A name without an extension returns `(name, "")`.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => (&name[..dot], &name[dot..]),
        _ => (name, ""),
    }
}
