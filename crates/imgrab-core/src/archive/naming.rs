//! Archive entry naming.

use crate::url_model::{last_path_segment, sanitize_file_stem, split_extension};
use url::Url;

/// Path segments shorter than this are replaced by a synthesized name.
const MIN_SEGMENT_CHARS: usize = 3;
const DEFAULT_EXTENSION: &str = ".jpg";
/// Archive label used when none (or an unusable one) is given.
pub const DEFAULT_LABEL: &str = "images";

/// Extension implied by a declared content type, first match wins.
pub fn extension_for_content_type(content_type: Option<&str>) -> &'static str {
    let ct = content_type.unwrap_or_default().to_ascii_lowercase();
    if ct.contains("png") {
        ".png"
    } else if ct.contains("svg") {
        ".svg"
    } else if ct.contains("ico") || ct.contains("icon") {
        ".ico"
    } else if ct.contains("gif") {
        ".gif"
    } else if ct.contains("webp") {
        ".webp"
    } else {
        DEFAULT_EXTENSION
    }
}

/// Entry name for the image at 1-based `index`: `{base}_{index}{ext}`.
///
/// The base comes from the last path segment, or `image_{index}` plus a
/// content-type extension when the segment has fewer than three characters;
/// a missing extension becomes `.jpg`. Appending the index on every entry
/// keeps names unique within one batch.
pub fn entry_name(index: usize, url: &Url, content_type: Option<&str>) -> String {
    let segment = last_path_segment(url);
    let filename = if segment.chars().count() < MIN_SEGMENT_CHARS {
        format!("image_{index}{}", extension_for_content_type(content_type))
    } else {
        segment.to_string()
    };
    let (base, ext) = split_extension(&filename);
    let ext = if ext.is_empty() { DEFAULT_EXTENSION } else { ext };
    format!("{base}_{index}{ext}")
}

/// `images_{label}.zip`, with the label made filesystem-safe.
pub fn archive_file_name(label: &str) -> String {
    let stem = sanitize_file_stem(label);
    let stem = if stem.is_empty() { DEFAULT_LABEL } else { stem.as_str() };
    format!("images_{stem}.zip")
}
