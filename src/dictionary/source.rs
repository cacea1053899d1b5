//! Word sources feeding the dictionary index.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the dictionary directory.
pub const DICTIONARY_PATH_ENV: &str = "PWD_DICTIONARY_PATH";

/// Directory read when [`DICTIONARY_PATH_ENV`] is not set.
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict";

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read dictionary directory: {0}")]
    Read(#[from] std::io::Error),
}

/// Produces the raw words to index.
///
/// Called at most once per validator, on first use.
pub trait WordSource: Send + Sync {
    fn words(&self) -> Result<Vec<String>, DictionaryError>;
}

/// In-memory word list.
#[derive(Debug, Default, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for WordList {
    fn words(&self) -> Result<Vec<String>, DictionaryError> {
        Ok(self.words.clone())
    }
}

/// Returns the dictionary directory.
///
/// Priority:
/// 1. Environment variable `PWD_DICTIONARY_PATH`
/// 2. Default path `/usr/share/dict`
pub fn get_dictionary_path() -> PathBuf {
    std::env::var(DICTIONARY_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DICTIONARY_PATH))
}

/// Reads every regular file of a directory, one word per line.
///
/// Files that cannot be read are skipped. Invalid UTF-8 is replaced rather
/// than rejected so that legacy word lists still load.
#[derive(Debug, Clone)]
pub struct DirectoryWordSource {
    path: PathBuf,
}

impl DirectoryWordSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Uses the directory named by `PWD_DICTIONARY_PATH`, or `/usr/share/dict`.
    pub fn from_env() -> Self {
        Self::new(get_dictionary_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for DirectoryWordSource {
    fn words(&self) -> Result<Vec<String>, DictionaryError> {
        if !self.path.is_dir() {
            return Err(DictionaryError::NotFound(self.path.clone()));
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.path)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        let mut words = Vec::new();
        for file in files {
            let content = match std::fs::read(&file) {
                Ok(content) => content,
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Skipping dictionary file {:?}: {}", file, _e);
                    continue;
                }
            };
            words.extend(
                String::from_utf8_lossy(&content)
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string),
            );
        }

        Ok(words)
    }
}
