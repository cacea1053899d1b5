//! Pattern section - detects systematic (sequential) characters.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::error::ValidationError;
use crate::normalize::char_len;
use crate::options::Options;

/// Counts adjacent code-point pairs that differ by exactly one.
///
/// Both ascending ("abc", "123") and descending ("cba", "321") runs count.
pub fn count_systematic_chars(s: &str) -> usize {
    let chars: Vec<u32> = s.chars().map(u32::from).collect();
    chars
        .windows(2)
        .filter(|w| w[0].abs_diff(w[1]) == 1)
        .count()
}

/// Maximum number of systematic pairs tolerated for a password of `len` code points.
pub fn systematic_limit(len: usize) -> usize {
    (3.0 + 0.09 * len as f64) as usize
}

/// Rejects passwords made up of too many sequential characters.
pub fn pattern_section(password: &SecretString, _options: &Options) -> SectionResult {
    let pwd = password.expose_secret();
    if count_systematic_chars(pwd) > systematic_limit(char_len(pwd)) {
        return Err(ValidationError::TooSystematic);
    }
    Ok(())
}
