//! File name normalization.

use crate::config::StripMode;

/// Trims every leading and trailing character that appears in `set`.
pub fn strip_charset<'a>(value: &'a str, set: &str) -> &'a str {
    value.trim_matches(|c: char| set.contains(c))
}

/// Removes `root` once if it is a literal prefix, then any leading `/`.
pub fn strip_prefix_root<'a>(value: &'a str, root: &str) -> &'a str {
    value
        .strip_prefix(root)
        .unwrap_or(value)
        .trim_start_matches('/')
}

/// Removes the downloads root from a content path.
///
/// [`StripMode::Charset`] trims characters of the root from both ends, so
/// `/downloads/download.mkv` with root `/downloads/` loses more than the
/// directory. [`StripMode::Prefix`] only removes the directory itself.
pub fn strip_download_root(content_path: &str, downloads_root: &str, mode: StripMode) -> String {
    match mode {
        StripMode::Charset => strip_charset(content_path, downloads_root),
        StripMode::Prefix => strip_prefix_root(content_path, downloads_root),
    }
    .to_string()
}

/// Lowercases and cleans an already stripped name.
///
/// Outer backslashes are trimmed, parentheses dropped, spaces turned into
/// periods.
pub fn clean_file_name(stripped: &str) -> String {
    let lowered = stripped.to_lowercase();
    strip_charset(&lowered, "\\")
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .map(|c| if c == ' ' { '.' } else { c })
        .collect()
}

/// Computes the destination file name for a content path.
pub fn normalize_file_name(content_path: &str, downloads_root: &str, mode: StripMode) -> String {
    clean_file_name(&strip_download_root(content_path, downloads_root, mode))
}
