//! Digest functions for recognising hashed dictionary words.

use sha2::Digest;

/// A digest function applied to every normalized dictionary word.
///
/// A password that is the hex encoding of such a digest is rejected as a
/// hashed dictionary word.
pub trait Hasher: Send + Sync {
    /// Short identifier used in logs and debug output.
    fn name(&self) -> &str;

    fn digest(&self, data: &[u8]) -> Vec<u8>;
}

/// SHA-1 digests.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha1;

/// SHA-256 digests.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256;

/// SHA-512 digests.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha512;

impl Hasher for Sha1 {
    fn name(&self) -> &str {
        "sha1"
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        sha1::Sha1::digest(data).to_vec()
    }
}

impl Hasher for Sha256 {
    fn name(&self) -> &str {
        "sha256"
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        sha2::Sha256::digest(data).to_vec()
    }
}

impl Hasher for Sha512 {
    fn name(&self) -> &str {
        "sha512"
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        sha2::Sha512::digest(data).to_vec()
    }
}
