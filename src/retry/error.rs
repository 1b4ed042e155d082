//! Error types for the backoff executor.

use std::time::Duration;

use thiserror::Error;

/// Why a single attempt did not succeed.
#[derive(Debug, Error)]
pub enum AttemptError<E> {
    /// The operation returned an error.
    #[error("{0}")]
    Failed(E),

    /// The operation did not finish within the per-attempt timeout.
    #[error("attempt timed out after {}s", .0.as_secs_f64())]
    TimedOut(Duration),
}

impl<E> AttemptError<E> {
    /// Returns the operation's own error, if the attempt did not time out.
    #[must_use]
    pub const fn as_failed(&self) -> Option<&E> {
        match self {
            Self::Failed(e) => Some(e),
            Self::TimedOut(_) => None,
        }
    }
}

/// Error returned when every attempt allowed by the policy failed.
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// All attempts failed; carries the reason the last one failed.
    #[error("gave up after {attempts} attempt(s): {last_error}")]
    Exhausted {
        /// Number of attempts made
        attempts: u32,
        /// Failure of the final attempt
        last_error: AttemptError<E>,
    },

    /// The policy allowed zero attempts, so nothing was tried.
    #[error("retry policy allows no attempts")]
    NoAttempts,
}
