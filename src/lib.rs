//! Password flaw detection library
//!
//! Rejects passwords that are too short, too uniform, too systematic, or
//! too close to a dictionary word (exactly, reversed, hashed, or within a
//! small edit distance), and rates the ones it accepts from 0 to 100.
//!
//! # Features
//!
//! - `async` (default): Enables [`rate_password_tx`] with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Directory read by [`DirectoryWordSource::from_env`]
//!   (default: `/usr/share/dict`)
//!
//! # Example
//!
//! ```rust
//! use pwd_crunch::{Options, Sha256, ValidationError, Validator, WordList};
//! use secrecy::SecretString;
//!
//! let validator = Validator::new(
//!     Options::default()
//!         .with_min_length(6)
//!         .with_min_diff(3)
//!         .with_min_dist(1)
//!         .with_hasher(Sha256)
//!         .with_dictionary(WordList::new(["password"])),
//! );
//!
//! let weak = SecretString::new("passwrd".to_string().into());
//! assert!(matches!(
//!     validator.check(&weak),
//!     Err(ValidationError::MangledDictionary { distance: 1, .. })
//! ));
//!
//! let strong = SecretString::new("Tr0ub4dor&3".to_string().into());
//! assert_eq!(validator.rate(&strong), Ok(88));
//! ```

// Internal modules
mod breach;
mod error;
mod normalize;
mod options;
mod rating;
mod sections;
mod validator;

pub mod dictionary;

// Public API
pub use breach::{BreachOracle, BreachStatus};
pub use dictionary::{
    DictionaryError, DictionaryIndex, DirectoryWordSource, Hasher, Sha1, Sha256, Sha512,
    WordList, WordSource,
};
pub use error::ValidationError;
pub use normalize::{normalize, reverse};
pub use options::{Options, DEFAULT_MIN_DIFF, DEFAULT_MIN_DIST, DEFAULT_MIN_LENGTH};
pub use rating::{rate, Composition};
pub use sections::{count_systematic_chars, systematic_limit};
pub use validator::Validator;

#[cfg(feature = "async")]
pub use validator::rate_password_tx;
