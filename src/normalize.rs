//! Text normalization shared by dictionary words and candidate passwords.

/// Trims surrounding whitespace and lowercases the text.
///
/// Dictionary words and passwords go through the same function so that
/// comparisons are case- and whitespace-insensitive.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Reverses a string by code point.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Number of code points in `s`.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
