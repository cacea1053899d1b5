//! Password validator - orchestrates structural, dictionary and breach checks.

use std::sync::OnceLock;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::breach::BreachStatus;
use crate::dictionary::DictionaryIndex;
use crate::error::ValidationError;
use crate::options::Options;
use crate::rating::rate;
use crate::sections::SECTIONS;

/// Checks passwords for common flaws and rates the ones it accepts.
///
/// A validator can be shared between threads. Its dictionary index is built
/// on first use; concurrent first callers wait for that single build.
#[derive(Debug)]
pub struct Validator {
    options: Options,
    index: OnceLock<DictionaryIndex>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Validator {
    /// Creates a validator. Zero `min_length` / `min_diff` fall back to defaults.
    pub fn new(options: Options) -> Self {
        Self {
            options: options.normalized(),
            index: OnceLock::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Builds the dictionary index if needed and returns it.
    ///
    /// Runs the build at most once. A word source that fails leaves the
    /// validator with an empty index.
    pub fn index_dictionaries(&self) -> &DictionaryIndex {
        self.index.get_or_init(|| {
            let Some(source) = self.options.dictionary.as_deref() else {
                return DictionaryIndex::default();
            };
            DictionaryIndex::build(
                source,
                &self.options.hashers,
                self.options.min_length,
                self.options.min_dist,
            )
            .unwrap_or_else(|_e| {
                #[cfg(feature = "tracing")]
                tracing::warn!("Dictionary index build FAILED, continuing without dictionary: {}", _e);
                DictionaryIndex::default()
            })
        })
    }

    /// Validates a password.
    ///
    /// Returns `Ok(())` if the password is acceptable, otherwise the first
    /// reason it was rejected.
    pub fn check(&self, password: &SecretString) -> Result<(), ValidationError> {
        for (_section_name, section_fn) in SECTIONS {
            if let Err(reason) = section_fn(password, &self.options) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password rejected by section {}: {}", _section_name, reason);
                return Err(reason);
            }
        }

        self.index_dictionaries()
            .lookup(password.expose_secret())
            .inspect_err(|_reason| {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password rejected by dictionary: {}", _reason);
            })?;

        if self.options.check_breaches {
            self.check_breach(password)?;
        }

        Ok(())
    }

    /// Grades a password from 0 (weak) to 100 (strong).
    ///
    /// Rejected passwords have no score; the error is the one
    /// [`check`](Self::check) returns.
    pub fn rate(&self, password: &SecretString) -> Result<u8, ValidationError> {
        self.check(password)?;
        Ok(rate(password.expose_secret()))
    }

    fn check_breach(&self, password: &SecretString) -> Result<(), ValidationError> {
        let Some(oracle) = self.options.breach_oracle.as_deref() else {
            #[cfg(feature = "tracing")]
            tracing::error!("Breach checking enabled without a breach oracle");
            return Err(ValidationError::BreachCheckFailed);
        };

        match oracle.check_breached(password) {
            BreachStatus::NotFound => Ok(()),
            BreachStatus::Found => Err(ValidationError::BreachFound),
            BreachStatus::Unreachable => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breach oracle unreachable");
                Err(ValidationError::BreachCheckFailed)
            }
        }
    }
}

/// Rates a password on the blocking thread pool and sends the result via channel.
///
/// Nothing is sent if `token` is cancelled before the rating starts or
/// before it is delivered; the receiver then observes the channel closing.
#[cfg(feature = "async")]
pub async fn rate_password_tx(
    validator: Arc<Validator>,
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<u8, ValidationError>>,
) {
    if token.is_cancelled() {
        return;
    }

    #[cfg(feature = "tracing")]
    tracing::info!("rating is about to start...");

    let result = match tokio::task::spawn_blocking(move || validator.rate(&password)).await {
        Ok(result) => result,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Password rating task failed: {}", _e);
            return;
        }
    };

    if token.is_cancelled() {
        return;
    }

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password rating result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DictionaryError, Sha1, Sha256, WordList, WordSource};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn example_validator() -> Validator {
        Validator::new(
            Options::default()
                .with_min_length(6)
                .with_min_diff(3)
                .with_min_dist(1)
                .with_dictionary(WordList::new(["password"])),
        )
    }

    /// Word source counting how often it is read.
    struct CountingSource {
        calls: Arc<AtomicUsize>,
        words: Vec<&'static str>,
    }

    impl WordSource for CountingSource {
        fn words(&self) -> Result<Vec<String>, DictionaryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.words.iter().map(|w| w.to_string()).collect())
        }
    }

    struct FailingSource;

    impl WordSource for FailingSource {
        fn words(&self) -> Result<Vec<String>, DictionaryError> {
            Err(DictionaryError::Read(std::io::Error::other("disk on fire")))
        }
    }

    #[test]
    fn test_check_example_too_short() {
        let v = example_validator();
        assert_eq!(v.check(&secret("pass")), Err(ValidationError::TooShort));
    }

    #[test]
    fn test_check_example_mangled() {
        let v = example_validator();
        assert_eq!(
            v.check(&secret("passwrd")),
            Err(ValidationError::MangledDictionary {
                word: "password".to_string(),
                distance: 1
            })
        );
    }

    #[test]
    fn test_check_example_accepted_and_rated() {
        let v = example_validator();
        assert_eq!(v.check(&secret("Tr0ub4dor&3")), Ok(()));
        assert_eq!(v.rate(&secret("Tr0ub4dor&3")), Ok(88));
    }

    #[test]
    fn test_check_too_systematic() {
        let v = Validator::new(Options::default().with_min_length(6).with_min_diff(3));
        assert_eq!(v.check(&secret("123456")), Err(ValidationError::TooSystematic));
    }

    #[test]
    fn test_check_order_of_structural_sections() {
        let v = Validator::new(
            Options::default()
                .with_must_contain_digit(true)
                .with_must_contain_symbol(true),
        );
        assert_eq!(v.check(&secret("   ")), Err(ValidationError::Empty));
        assert_eq!(v.check(&secret("aaaa")), Err(ValidationError::TooShort));
        assert_eq!(v.check(&secret("aaaaaaaa")), Err(ValidationError::TooFewChars));
        assert_eq!(v.check(&secret("qwfpgjlu")), Err(ValidationError::NoDigits));
        assert_eq!(v.check(&secret("qwfpgjl7")), Err(ValidationError::NoSymbols));
        assert_eq!(v.check(&secret("abcdefg!7")), Err(ValidationError::TooSystematic));
        assert_eq!(v.check(&secret("qwfpgj!7")), Ok(()));
    }

    #[test]
    fn test_check_dictionary_exact() {
        let v = Validator::new(Options::default().with_dictionary(WordList::new(["Dragonfly"])));
        assert_eq!(
            v.check(&secret("dragonfly")),
            Err(ValidationError::Dictionary {
                word: "dragonfly".to_string()
            })
        );
    }

    #[test]
    fn test_check_hashed_dictionary() {
        let v = Validator::new(
            Options::default()
                .with_hasher(Sha1)
                .with_hasher(Sha256)
                .with_dictionary(WordList::new(["sunshine", "letmein99"])),
        );
        assert_eq!(
            v.check(&secret(
                "a941a4c4fd0c01cddef61b8be963bf4c1e2b0811c037ce3f1835fddf6ef6c223"
            )),
            Err(ValidationError::HashedDictionary {
                word: "sunshine".to_string()
            })
        );
        assert_eq!(
            v.check(&secret("20c02f5c23e5fd1bdf7ce0fa09553af818c782cf")),
            Err(ValidationError::HashedDictionary {
                word: "letmein99".to_string()
            })
        );
    }

    #[test]
    fn test_check_is_idempotent() {
        let v = example_validator();
        for pwd in ["passwrd", "Tr0ub4dor&3", "pass"] {
            assert_eq!(v.check(&secret(pwd)), v.check(&secret(pwd)));
        }
    }

    #[test]
    fn test_rate_rejected_returns_check_error() {
        let v = example_validator();
        assert_eq!(v.rate(&secret("pass")), Err(ValidationError::TooShort));
        assert_eq!(v.rate(&secret("passwrd")), v.check(&secret("passwrd")).map(|_| 0));
    }

    #[test]
    fn test_zero_options_use_defaults() {
        let v = Validator::new(Options::default().with_min_length(0).with_min_diff(0));
        assert_eq!(v.options().min_length, 8);
        assert_eq!(v.options().min_diff, 5);
    }

    #[test]
    fn test_failing_source_yields_empty_index() {
        let v = Validator::new(Options::default().with_dictionary(FailingSource));
        assert!(v.index_dictionaries().is_empty());
        assert_eq!(v.check(&secret("qwfpgj!7")), Ok(()));
    }

    #[test]
    fn test_index_built_once_under_concurrency() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            calls: Arc::clone(&calls),
            words: vec!["password", "dragonfly"],
        };
        let v = Arc::new(Validator::new(Options::default().with_dictionary(source)));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let v = Arc::clone(&v);
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    v.check(&secret("dragonfly"))
                })
            })
            .collect();

        for handle in handles {
            let result = handle.join().expect("thread panicked");
            assert!(matches!(result, Err(ValidationError::Dictionary { .. })));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(v.index_dictionaries().len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_breach_found() {
        let v = Validator::new(Options::default().with_breach_oracle(|_: &SecretString| BreachStatus::Found));
        assert_eq!(v.check(&secret("qwfpgj!7")), Err(ValidationError::BreachFound));
    }

    #[test]
    fn test_breach_unreachable() {
        let v = Validator::new(
            Options::default().with_breach_oracle(|_: &SecretString| BreachStatus::Unreachable),
        );
        assert_eq!(v.check(&secret("qwfpgj!7")), Err(ValidationError::BreachCheckFailed));
    }

    #[test]
    fn test_breach_not_found() {
        let v = Validator::new(Options::default().with_breach_oracle(|_: &SecretString| BreachStatus::NotFound));
        assert_eq!(v.check(&secret("qwfpgj!7")), Ok(()));
    }

    #[test]
    fn test_breach_enabled_without_oracle() {
        let mut options = Options::default();
        options.check_breaches = true;
        let v = Validator::new(options);
        assert_eq!(v.check(&secret("qwfpgj!7")), Err(ValidationError::BreachCheckFailed));
    }

    #[test]
    fn test_breach_oracle_not_consulted_for_rejected_passwords() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let v = Validator::new(Options::default().with_breach_oracle(move |_: &SecretString| {
            counter.fetch_add(1, Ordering::SeqCst);
            BreachStatus::NotFound
        }));
        assert_eq!(v.check(&secret("short")), Err(ValidationError::TooShort));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(v.check(&secret("qwfpgj!7")), Ok(()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
