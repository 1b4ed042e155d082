//! Tests for the `Backoff` executor.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use super::{AttemptError, Backoff, RetryError, RetryPolicy};
use crate::time::{InstantSleeper, RecordingSleeper};

#[derive(Debug, PartialEq, Eq)]
struct Flaky(&'static str);

impl std::fmt::Display for Flaky {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Returns an operation that fails `failures` times and then yields its attempt number.
fn failing_then_ok(
    failures: u32,
    counter: &AtomicU32,
) -> impl FnMut() -> std::future::Ready<Result<u32, Flaky>> + '_ {
    move || {
        let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt <= failures {
            std::future::ready(Err(Flaky("boom")))
        } else {
            std::future::ready(Ok(attempt))
        }
    }
}

mod success {
    use super::*;

    #[tokio::test]
    async fn first_attempt_success_returns_without_sleeping() {
        let sleeper = RecordingSleeper::default();
        let backoff = Backoff::new(RetryPolicy::new()).with_sleeper(&sleeper);
        let counter = AtomicU32::new(0);

        let result = backoff.execute("op", failing_then_ok(0, &counter)).await;

        assert_eq!(result.unwrap(), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(sleeper.delays().is_empty());
    }

    #[tokio::test]
    async fn success_after_failures_sleeps_only_after_failures() {
        let sleeper = RecordingSleeper::default();
        let backoff = Backoff::new(RetryPolicy::new()).with_sleeper(&sleeper);
        let counter = AtomicU32::new(0);

        let result = backoff.execute("op", failing_then_ok(2, &counter)).await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(
            sleeper.delays(),
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );
    }
}

mod exhaustion {
    use super::*;

    #[tokio::test]
    async fn default_policy_delays_are_exact_doubling_sequence() {
        let sleeper = RecordingSleeper::default();
        let backoff = Backoff::new(RetryPolicy::new()).with_sleeper(&sleeper);
        let counter = AtomicU32::new(0);

        let result = backoff.execute("op", failing_then_ok(u32::MAX, &counter)).await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 5);
        assert_eq!(
            sleeper.delays(),
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(8),
                Duration::from_secs(16),
            ]
        );
    }

    #[tokio::test]
    async fn exhausted_error_carries_attempts_and_last_error() {
        let policy = RetryPolicy::new().with_max_attempts(3);
        let backoff = Backoff::new(policy).with_sleeper(InstantSleeper);
        let counter = AtomicU32::new(0);

        let result = backoff.execute("op", failing_then_ok(u32::MAX, &counter)).await;

        match result {
            Err(RetryError::Exhausted {
                attempts,
                last_error,
            }) => {
                assert_eq!(attempts, 3);
                assert_eq!(last_error.as_failed(), Some(&Flaky("boom")));
            }
            other => panic!("Expected Exhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn never_exceeds_max_attempts() {
        let policy = RetryPolicy::new().with_max_attempts(1);
        let backoff = Backoff::new(policy).with_sleeper(InstantSleeper);
        let counter = AtomicU32::new(0);

        let _ = backoff.execute("op", failing_then_ok(u32::MAX, &counter)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn zero_attempts_reports_no_attempts() {
        let mut policy = RetryPolicy::new();
        policy.max_attempts = 0;
        let backoff = Backoff::new(policy).with_sleeper(InstantSleeper);
        let counter = AtomicU32::new(0);

        let result = backoff.execute("op", failing_then_ok(0, &counter)).await;

        assert!(matches!(result, Err(RetryError::NoAttempts)));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn exhausted_error_displays_attempts_and_reason() {
        let error: RetryError<Flaky> = RetryError::Exhausted {
            attempts: 5,
            last_error: AttemptError::Failed(Flaky("connection refused")),
        };

        assert_eq!(
            error.to_string(),
            "gave up after 5 attempt(s): connection refused"
        );
    }
}

mod timeouts {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn slow_attempt_times_out_and_is_retried() {
        let policy = RetryPolicy::new()
            .with_max_attempts(2)
            .with_attempt_timeout(Duration::from_secs(10));
        let backoff = Backoff::new(policy).with_sleeper(InstantSleeper);
        let counter = AtomicU32::new(0);

        let result = backoff
            .execute("slow", || {
                let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if attempt == 1 {
                        tokio::time::sleep(Duration::from_secs(60)).await;
                    }
                    Ok::<_, Flaky>(attempt)
                }
            })
            .await;

        assert_eq!(result.unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn all_attempts_timing_out_reports_timeout() {
        let policy = RetryPolicy::new()
            .with_max_attempts(2)
            .with_attempt_timeout(Duration::from_secs(1));
        let backoff = Backoff::new(policy).with_sleeper(InstantSleeper);

        let result = backoff
            .execute("stuck", || async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok::<(), Flaky>(())
            })
            .await;

        assert!(matches!(
            result,
            Err(RetryError::Exhausted {
                attempts: 2,
                last_error: AttemptError::TimedOut(_),
            })
        ));
    }
}
