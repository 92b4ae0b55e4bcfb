//! Shared utilities for `git_issues`.
//!
//! - Percent-encoding of search URL components
//! - Progress indicators (for the page fetch loop)

pub mod progress;

/// Percent-encode `value`, leaving every occurrence of `keep` literal.
///
/// Everything except ASCII alphanumerics, `-`, `_`, `.`, `~` and `keep`
/// is encoded as UTF-8 `%XX` sequences.
#[must_use]
pub fn encode_keeping(value: &str, keep: char) -> String {
    let mut buf = [0u8; 4];
    let separator: &str = keep.encode_utf8(&mut buf);
    value
        .split(keep)
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join(separator)
}
