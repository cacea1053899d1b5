//! Character variety sections - unique characters, digits and symbols.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::error::ValidationError;
use crate::options::Options;

/// Number of distinct code points in `s`.
pub(crate) fn count_unique_chars(s: &str) -> usize {
    s.chars().collect::<HashSet<char>>().len()
}

/// Character classes present in a password, found in one pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CharClasses {
    digit: bool,
    symbol: bool,
}

impl CharClasses {
    fn of(s: &str) -> Self {
        let mut classes = Self::default();
        for c in s.chars() {
            if c.is_ascii_digit() {
                classes.digit = true;
            } else if !(c.is_alphanumeric() || c == '_' || c.is_whitespace()) {
                classes.symbol = true;
            }
        }
        classes
    }
}

/// Rejects passwords with fewer distinct characters than `min_diff`.
pub fn unique_chars_section(password: &SecretString, options: &Options) -> SectionResult {
    if count_unique_chars(password.expose_secret()) < options.min_diff {
        return Err(ValidationError::TooFewChars);
    }
    Ok(())
}

/// Requires an ASCII decimal digit when `must_contain_digit` is set.
pub fn digit_section(password: &SecretString, options: &Options) -> SectionResult {
    if options.must_contain_digit && !CharClasses::of(password.expose_secret()).digit {
        return Err(ValidationError::NoDigits);
    }
    Ok(())
}

/// Requires a symbol when `must_contain_symbol` is set.
///
/// A symbol is anything that is neither a word character (alphanumeric or
/// underscore) nor whitespace.
pub fn symbol_section(password: &SecretString, options: &Options) -> SectionResult {
    if options.must_contain_symbol && !CharClasses::of(password.expose_secret()).symbol {
        return Err(ValidationError::NoSymbols);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_count_unique_chars() {
        assert_eq!(count_unique_chars("aaaa"), 1);
        assert_eq!(count_unique_chars("abcabc"), 3);
        assert_eq!(count_unique_chars("ééè"), 2);
    }

    #[test]
    fn test_unique_chars_section_too_few() {
        let options = Options::default();
        assert_eq!(
            unique_chars_section(&secret("aabbccdd"), &options),
            Err(ValidationError::TooFewChars)
        );
        assert_eq!(unique_chars_section(&secret("abcdeabc"), &options), Ok(()));
    }

    #[test]
    fn test_char_classes() {
        assert_eq!(
            CharClasses::of("abc_ DEF"),
            CharClasses { digit: false, symbol: false }
        );
        assert_eq!(
            CharClasses::of("abc1"),
            CharClasses { digit: true, symbol: false }
        );
        assert_eq!(
            CharClasses::of("abc!"),
            CharClasses { digit: false, symbol: true }
        );
        // Non-ASCII letters are word characters, not symbols
        assert!(!CharClasses::of("ünïcödé").symbol);
        assert!(CharClasses::of("price€").symbol);
    }

    #[test]
    fn test_digit_section() {
        let options = Options::default().with_must_contain_digit(true);
        assert_eq!(
            digit_section(&secret("NoNumbers!"), &options),
            Err(ValidationError::NoDigits)
        );
        assert_eq!(digit_section(&secret("Numbers1"), &options), Ok(()));

        let relaxed = Options::default();
        assert_eq!(digit_section(&secret("NoNumbers!"), &relaxed), Ok(()));
    }

    #[test]
    fn test_symbol_section() {
        let options = Options::default().with_must_contain_symbol(true);
        assert_eq!(
            symbol_section(&secret("No_Special 123"), &options),
            Err(ValidationError::NoSymbols)
        );
        assert_eq!(symbol_section(&secret("Special#123"), &options), Ok(()));
    }
}
