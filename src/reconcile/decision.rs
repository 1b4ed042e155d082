//! Update-or-skip decision.

use crate::dns::Address;

/// Outcome of comparing the desired address with the published one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconciliationVerdict {
    /// The zone already publishes the desired address
    Match,
    /// The zone must be updated to the carried address
    Mismatch(Address),
}

/// Compares the desired address with the observed one.
///
/// An absent record never matches. Force-commit is applied by the caller.
#[must_use]
pub fn evaluate(desired: Address, observed: Option<Address>) -> ReconciliationVerdict {
    if observed == Some(desired) {
        ReconciliationVerdict::Match
    } else {
        ReconciliationVerdict::Mismatch(desired)
    }
}
