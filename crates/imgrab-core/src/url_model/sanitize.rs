//! Filesystem-safe stems for output file names.

/// Longest stem kept, leaving room for a prefix and extension under NAME_MAX.
const MAX_STEM_BYTES: usize = 200;

/// Makes `raw` safe to embed in a file name on Linux.
///
/// Path separators, NUL, control characters and whitespace become `_`; runs
/// of `_` collapse to one; leading and trailing dots and underscores are
/// trimmed; the result is cut to [`MAX_STEM_BYTES`] on a char boundary.
pub fn sanitize_file_stem(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        let unsafe_char = matches!(c, '/' | '\\' | '\0') || c.is_control() || c.is_whitespace();
        let c = if unsafe_char { '_' } else { c };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    let mut end = trimmed.len().min(MAX_STEM_BYTES);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}
