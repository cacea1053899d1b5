//! Breached-password oracle seam.
//!
//! The validator does not know how breach data is obtained (online API,
//! local dump, ...). It only asks an oracle whether a password is known.

use secrecy::SecretString;

/// Answer of a breach lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    /// The password appears in breach data.
    Found,
    /// The password is not known to be breached.
    NotFound,
    /// The breach data could not be consulted.
    Unreachable,
}

/// Source of breached-password knowledge.
///
/// Implementations may block (e.g. on a network request); timeouts and
/// cancellation belong to the implementation, not to the validator.
pub trait BreachOracle: Send + Sync {
    fn check_breached(&self, password: &SecretString) -> BreachStatus;
}

impl<F> BreachOracle for F
where
    F: Fn(&SecretString) -> BreachStatus + Send + Sync,
{
    fn check_breached(&self, password: &SecretString) -> BreachStatus {
        self(password)
    }
}
