//! Short host label used to name archives.

use url::Url;

/// Host name with one leading `www.` removed (`https://www.ex.com:8443/` → `ex.com`).
///
/// The port is not part of the label.
pub fn host_label(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    host.strip_prefix("www.").unwrap_or(host).to_string()
}
