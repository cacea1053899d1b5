//! Length sections - reject blank and too short passwords.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::error::ValidationError;
use crate::normalize::char_len;
use crate::options::Options;

/// Rejects empty and whitespace-only passwords.
pub fn empty_section(password: &SecretString, _options: &Options) -> SectionResult {
    if password.expose_secret().trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

/// Rejects passwords with fewer code points than `min_length`.
pub fn length_section(password: &SecretString, options: &Options) -> SectionResult {
    if char_len(password.expose_secret()) < options.min_length {
        return Err(ValidationError::TooShort);
    }
    Ok(())
}
