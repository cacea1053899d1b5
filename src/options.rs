//! Validator configuration.

use std::fmt;
use std::sync::Arc;

use crate::breach::BreachOracle;
use crate::dictionary::{Hasher, WordSource};

/// Default minimum password length.
pub const DEFAULT_MIN_LENGTH: usize = 8;
/// Default minimum number of distinct characters.
pub const DEFAULT_MIN_DIFF: usize = 5;
/// Default edit distance under which a password counts as a mangled dictionary word.
pub const DEFAULT_MIN_DIST: usize = 3;

/// Settings for a [`Validator`](crate::Validator).
///
/// Options are moved into the validator and never change afterwards.
/// A `min_length` or `min_diff` of zero is replaced by its default.
///
/// The default options carry no dictionary. To check against the system
/// word lists (`PWD_DICTIONARY_PATH`, else `/usr/share/dict`), pass
/// [`DirectoryWordSource::from_env`](crate::DirectoryWordSource::from_env)
/// explicitly:
///
/// ```rust,no_run
/// use pwd_crunch::{DirectoryWordSource, Options, Validator};
///
/// let validator = Validator::new(
///     Options::default().with_dictionary(DirectoryWordSource::from_env()),
/// );
/// ```
#[derive(Clone)]
pub struct Options {
    /// Minimum number of characters (>= 1, default 8).
    pub min_length: usize,
    /// Minimum number of distinct characters (>= 1, default 5).
    pub min_diff: usize,
    /// Maximum edit distance for mangled dictionary matches (default 3).
    pub min_dist: usize,
    /// Digest functions used to recognise hashed dictionary words.
    pub hashers: Vec<Arc<dyn Hasher>>,
    /// Words indexed on first use.
    pub dictionary: Option<Arc<dyn WordSource>>,
    /// Require at least one digit.
    pub must_contain_digit: bool,
    /// Require at least one special character.
    pub must_contain_symbol: bool,
    /// Consult the breach oracle as the last step of a check.
    pub check_breaches: bool,
    /// Oracle used when `check_breaches` is set.
    pub breach_oracle: Option<Arc<dyn BreachOracle>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            min_diff: DEFAULT_MIN_DIFF,
            min_dist: DEFAULT_MIN_DIST,
            hashers: Vec::new(),
            dictionary: None,
            must_contain_digit: false,
            must_contain_symbol: false,
            check_breaches: false,
            breach_oracle: None,
        }
    }
}

impl Options {
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_min_diff(mut self, min_diff: usize) -> Self {
        self.min_diff = min_diff;
        self
    }

    pub fn with_min_dist(mut self, min_dist: usize) -> Self {
        self.min_dist = min_dist;
        self
    }

    pub fn with_hasher(mut self, hasher: impl Hasher + 'static) -> Self {
        self.hashers.push(Arc::new(hasher));
        self
    }

    pub fn with_dictionary(mut self, source: impl WordSource + 'static) -> Self {
        self.dictionary = Some(Arc::new(source));
        self
    }

    pub fn with_must_contain_digit(mut self, required: bool) -> Self {
        self.must_contain_digit = required;
        self
    }

    pub fn with_must_contain_symbol(mut self, required: bool) -> Self {
        self.must_contain_symbol = required;
        self
    }

    /// Enables breach checking through `oracle`.
    pub fn with_breach_oracle(mut self, oracle: impl BreachOracle + 'static) -> Self {
        self.check_breaches = true;
        self.breach_oracle = Some(Arc::new(oracle));
        self
    }

    /// Replaces out-of-range values with their defaults.
    pub(crate) fn normalized(mut self) -> Self {
        if self.min_length == 0 {
            self.min_length = DEFAULT_MIN_LENGTH;
        }
        if self.min_diff == 0 {
            self.min_diff = DEFAULT_MIN_DIFF;
        }
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hashers: Vec<&str> = self.hashers.iter().map(|h| h.name()).collect();
        f.debug_struct("Options")
            .field("min_length", &self.min_length)
            .field("min_diff", &self.min_diff)
            .field("min_dist", &self.min_dist)
            .field("hashers", &hashers)
            .field("dictionary", &self.dictionary.is_some())
            .field("must_contain_digit", &self.must_contain_digit)
            .field("must_contain_symbol", &self.must_contain_symbol)
            .field("check_breaches", &self.check_breaches)
            .field("breach_oracle", &self.breach_oracle.is_some())
            .finish()
    }
}
