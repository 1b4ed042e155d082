//! Backoff schedule shared by address resolution and health-check delivery.

use std::time::Duration;

/// Configuration for exponential backoff retry behavior.
///
/// Controls how many times an operation is attempted, how long each attempt
/// may run, and how long to wait after a failed attempt. The wait after
/// attempt `k` (1-indexed) is `initial_delay * multiplier^(k-1)`, capped at
/// `max_delay`.
///
/// # Defaults
///
/// - `max_attempts`: 5
/// - `initial_delay`: 1 second
/// - `max_delay`: 60 seconds
/// - `multiplier`: 2.0
/// - `attempt_timeout`: 10 seconds
///
/// With the defaults, five failed attempts wait 1, 2, 4, 8 and 16 seconds.
///
/// # Example
///
/// ```
/// use route53_ddns::retry::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new()
///     .with_max_attempts(3)
///     .with_initial_delay(Duration::from_millis(500))
///     .with_attempt_timeout(Duration::from_secs(5));
///
/// assert_eq!(policy.delay_after_attempt(2), Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial attempt).
    pub max_attempts: u32,

    /// Delay after the first failed attempt.
    pub initial_delay: Duration,

    /// Upper bound for any single delay.
    pub max_delay: Duration,

    /// Multiplier applied to the delay after each failed attempt.
    pub multiplier: f64,

    /// Deadline for a single attempt.
    pub attempt_timeout: Duration,
}

impl RetryPolicy {
    /// Default maximum attempts.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

    /// Default initial delay (1 second).
    pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);

    /// Default maximum delay (60 seconds).
    pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(60);

    /// Default multiplier (2.0).
    pub const DEFAULT_MULTIPLIER: f64 = 2.0;

    /// Default per-attempt timeout (10 seconds).
    pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Minimum value for `max_attempts`.
    pub const MIN_MAX_ATTEMPTS: u32 = 1;

    /// Creates a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_delay: Self::DEFAULT_INITIAL_DELAY,
            max_delay: Self::DEFAULT_MAX_DELAY,
            multiplier: Self::DEFAULT_MULTIPLIER,
            attempt_timeout: Self::DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    /// Sets the maximum number of attempts.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is less than 1.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        assert!(
            max_attempts >= Self::MIN_MAX_ATTEMPTS,
            "max_attempts must be at least 1"
        );
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the delay after the first failed attempt.
    ///
    /// Zero delay is supported (useful for testing) but creates a tight
    /// retry loop in production.
    #[must_use]
    pub const fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the maximum delay between attempts.
    #[must_use]
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Sets the delay multiplier.
    ///
    /// # Panics
    ///
    /// Panics if `multiplier` is not positive (must be > 0.0).
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        assert!(multiplier > 0.0, "multiplier must be positive");
        self.multiplier = multiplier;
        self
    }

    /// Sets the deadline for a single attempt.
    #[must_use]
    pub const fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Computes the delay that follows a failed attempt.
    ///
    /// `attempt` is 1-indexed; attempt 0 is treated as attempt 1.
    #[must_use]
    pub fn delay_after_attempt(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt.saturating_sub(1)).unwrap_or(i32::MAX);
        let delay_secs = self.initial_delay.as_secs_f64() * self.multiplier.powi(exponent);
        let capped = delay_secs.min(self.max_delay.as_secs_f64());
        Duration::from_secs_f64(capped)
    }

    /// Returns the full delay schedule for a run in which every attempt fails.
    #[must_use]
    pub fn schedule(&self) -> Vec<Duration> {
        (1..=self.max_attempts)
            .map(|attempt| self.delay_after_attempt(attempt))
            .collect()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
