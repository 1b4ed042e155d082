//! The retry loop itself.

use std::fmt::Display;
use std::future::Future;

use crate::time::{Sleeper, TokioSleeper};

use super::{AttemptError, RetryError, RetryPolicy};

/// Runs fallible async operations under a [`RetryPolicy`].
///
/// Every attempt is bounded by the policy's `attempt_timeout`. After each
/// failed attempt, including the final one, the executor sleeps for the
/// scheduled delay; a successful attempt returns immediately.
///
/// # Type Parameters
///
/// - `S`: The sleeper used for delays (defaults to [`TokioSleeper`])
///
/// # Example
///
/// ```
/// use route53_ddns::retry::{Backoff, RetryPolicy};
/// use route53_ddns::time::InstantSleeper;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let backoff = Backoff::new(RetryPolicy::new()).with_sleeper(InstantSleeper);
/// let value: Result<u32, _> = backoff
///     .execute("answer", || async { Ok::<_, std::io::Error>(42) })
///     .await;
/// assert_eq!(value.unwrap(), 42);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Backoff<S = TokioSleeper> {
    policy: RetryPolicy,
    sleeper: S,
}

impl Backoff<TokioSleeper> {
    /// Creates an executor that sleeps on the tokio timer.
    #[must_use]
    pub const fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            sleeper: TokioSleeper,
        }
    }
}

impl<S> Backoff<S> {
    /// Replaces the sleeper used for delays.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Backoff<S2> {
        Backoff {
            policy: self.policy,
            sleeper,
        }
    }
}

impl<S: Sleeper> Backoff<S> {
    /// Runs `operation` until it succeeds or the policy's attempts run out.
    ///
    /// `label` names the operation in log lines.
    ///
    /// # Errors
    ///
    /// Returns [`RetryError::Exhausted`] carrying the last failure when every
    /// attempt failed, or [`RetryError::NoAttempts`] when the policy allows
    /// zero attempts.
    pub async fn execute<T, E, F, Fut>(
        &self,
        label: &str,
        mut operation: F,
    ) -> Result<T, RetryError<E>>
    where
        E: Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let max_attempts = self.policy.max_attempts;
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            let outcome = tokio::time::timeout(self.policy.attempt_timeout, operation()).await;

            let error = match outcome {
                Ok(Ok(value)) => {
                    if attempt > 1 {
                        tracing::debug!("{label} succeeded on attempt {attempt}/{max_attempts}");
                    }
                    return Ok(value);
                }
                Ok(Err(e)) => AttemptError::Failed(e),
                Err(_) => AttemptError::TimedOut(self.policy.attempt_timeout),
            };

            tracing::warn!("{label} attempt {attempt}/{max_attempts} failed: {error}");
            last_error = Some(error);

            let delay = self.policy.delay_after_attempt(attempt);
            self.sleeper.sleep(delay).await;
        }

        match last_error {
            Some(last_error) => Err(RetryError::Exhausted {
                attempts: max_attempts,
                last_error,
            }),
            None => Err(RetryError::NoAttempts),
        }
    }
}
