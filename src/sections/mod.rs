//! Structural password checks
//!
//! Each section inspects one aspect of the raw (non-normalized) password.
//! The validator runs them in a fixed order and stops at the first failure.

mod length;
mod pattern;
mod variety;

pub use length::{empty_section, length_section};
pub use pattern::{count_systematic_chars, pattern_section, systematic_limit};
pub use variety::{digit_section, symbol_section, unique_chars_section};

pub(crate) use variety::count_unique_chars;

use crate::error::ValidationError;
use crate::options::Options;
use secrecy::SecretString;

/// Result type for section functions.
/// - `Ok(())` - Section passed
/// - `Err(reason)` - Password rejected
pub type SectionResult = Result<(), ValidationError>;

/// Signature shared by every structural section.
pub type Section = fn(&SecretString, &Options) -> SectionResult;

/// Structural sections in evaluation order.
pub const SECTIONS: [(&str, Section); 6] = [
    ("empty", empty_section),
    ("length", length_section),
    ("unique", unique_chars_section),
    ("digit", digit_section),
    ("symbol", symbol_section),
    ("pattern", pattern_section),
];
