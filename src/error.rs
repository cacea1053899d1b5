//! Rejection reasons returned by the validator.

use thiserror::Error;

/// Why a password was rejected.
///
/// Exactly one reason is reported per check: the first failing rule wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password is empty or all whitespace")]
    Empty,
    #[error("Password is too short")]
    TooShort,
    #[error("Password does not contain enough different characters")]
    TooFewChars,
    #[error("Password must contain at least one digit")]
    NoDigits,
    #[error("Password must contain at least one special character")]
    NoSymbols,
    #[error("Password is too systematic")]
    TooSystematic,
    #[error("Password is too common / from a dictionary")]
    Dictionary { word: String },
    #[error("Password is mangled, but too common / from a dictionary (distance {distance})")]
    MangledDictionary { word: String, distance: usize },
    #[error("Password is hashed, but too common / from a dictionary")]
    HashedDictionary { word: String },
    #[error("Password was found in a database of breached passwords")]
    BreachFound,
    #[error("Breached password database could not be checked")]
    BreachCheckFailed,
}

impl ValidationError {
    /// The dictionary word that caused the rejection, if any.
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::Dictionary { word }
            | Self::MangledDictionary { word, .. }
            | Self::HashedDictionary { word } => Some(word),
            _ => None,
        }
    }

    /// The measured edit distance for mangled dictionary matches.
    pub fn distance(&self) -> Option<usize> {
        match self {
            Self::MangledDictionary { distance, .. } => Some(*distance),
            _ => None,
        }
    }
}
