//! Dictionary index
//!
//! Built once from a [`WordSource`], then only read. Holds the normalized
//! words with their code points, the length of the longest word and, per
//! configured [`Hasher`], a map from digest to word.

pub mod fuzzy;
mod hasher;
mod source;

pub use hasher::{Hasher, Sha1, Sha256, Sha512};
pub use source::{
    get_dictionary_path, DictionaryError, DirectoryWordSource, WordList, WordSource,
    DEFAULT_DICTIONARY_PATH, DICTIONARY_PATH_ENV,
};

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ValidationError;
use crate::normalize::{char_len, normalize, reverse};

/// Digest -> word map of one hash algorithm.
#[derive(Debug)]
struct HashedWords {
    algorithm: String,
    digests: HashMap<Vec<u8>, String>,
}

/// Read-only lookup structure over a dictionary.
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    words: HashMap<String, Vec<char>>,
    max_word_len: usize,
    hashed_words: Vec<HashedWords>,
    min_dist: usize,
}

impl DictionaryIndex {
    /// Reads all words from `source` and indexes them.
    ///
    /// # Errors
    ///
    /// Returns the source's error if it cannot produce its words.
    pub fn build(
        source: &dyn WordSource,
        hashers: &[Arc<dyn Hasher>],
        min_length: usize,
        min_dist: usize,
    ) -> Result<Self, DictionaryError> {
        let words = source.words()?;
        Ok(Self::from_words(words, hashers, min_length, min_dist))
    }

    /// Indexes an already loaded sequence of words.
    ///
    /// Words shorter than `min_length - min_dist` are left out of the exact
    /// and fuzzy set: any password close enough to them is already too short.
    /// Digests are computed for every word.
    pub fn from_words<I, S>(
        words: I,
        hashers: &[Arc<dyn Hasher>],
        min_length: usize,
        min_dist: usize,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let floor = min_length.saturating_sub(min_dist);
        let mut index = Self {
            min_dist,
            hashed_words: hashers
                .iter()
                .map(|h| HashedWords {
                    algorithm: h.name().to_string(),
                    digests: HashMap::new(),
                })
                .collect(),
            ..Self::default()
        };

        for word in words {
            let nw = normalize(word.as_ref());
            let nwlen = char_len(&nw);
            index.max_word_len = index.max_word_len.max(nwlen);

            for (hasher, hashed) in hashers.iter().zip(index.hashed_words.iter_mut()) {
                hashed.digests.insert(hasher.digest(nw.as_bytes()), nw.clone());
            }

            if nwlen >= floor {
                let chars = nw.chars().collect();
                index.words.insert(nw, chars);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Dictionary index built: {} words (longest {}), {} digest tables",
            index.words.len(),
            index.max_word_len,
            index.hashed_words.len()
        );

        index
    }

    /// Number of words in the exact/fuzzy set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Code-point length of the longest word seen while building.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Whether `word` (after normalization) is in the exact/fuzzy set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&normalize(word))
    }

    /// Number of digests indexed for the algorithm called `algorithm`.
    pub fn digest_count(&self, algorithm: &str) -> Option<usize> {
        self.hashed_words
            .iter()
            .find(|h| h.algorithm == algorithm)
            .map(|h| h.digests.len())
    }

    /// Checks a password against the index.
    ///
    /// Order: exact match, reversed exact match, hashed match, then fuzzy
    /// match of the password and its reversal.
    pub fn lookup(&self, password: &str) -> Result<(), ValidationError> {
        let pw = normalize(password);
        let revpw = reverse(&pw);
        let pwlen = char_len(&pw);

        // Perfect matches are impossible past the longest word
        if pwlen <= self.max_word_len {
            if self.words.contains_key(&pw) {
                return Err(ValidationError::Dictionary { word: pw });
            }
            if self.words.contains_key(&revpw) {
                return Err(ValidationError::MangledDictionary {
                    word: revpw,
                    distance: 0,
                });
            }
        }

        if let Some(word) = self.find_hashed(&pw) {
            return Err(ValidationError::HashedDictionary {
                word: word.to_string(),
            });
        }

        // No word can be within min_dist of a password this long
        if pwlen <= self.max_word_len + self.min_dist {
            let threshold = (pwlen / 2).min(self.min_dist);
            let words = self.words.iter().map(|(w, c)| (w.as_str(), c.as_slice()));
            if let Some(found) = fuzzy::find_mangled(words, &pw, &revpw, threshold) {
                return Err(ValidationError::MangledDictionary {
                    word: found.word.to_string(),
                    distance: found.distance,
                });
            }
        }

        Ok(())
    }

    /// Word whose digest equals the hex-decoded password, under any algorithm.
    fn find_hashed(&self, pw: &str) -> Option<&str> {
        if self.hashed_words.is_empty() {
            return None;
        }
        let digest = hex::decode(pw).ok()?;
        self.hashed_words
            .iter()
            .find_map(|h| h.digests.get(&digest))
            .map(String::as_str)
    }
}
