//! Time abstractions for testability.
//!
//! This module provides:
//! - A [`Clock`] trait so tests can pin the timestamp written to audit records
//! - A [`Sleeper`] trait so tests can observe backoff delays without waiting

use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};

/// Abstraction over system time for testability.
///
/// Implementations provide the current time, allowing tests to inject
/// controlled time values instead of relying on actual system time.
///
/// # Example
///
/// ```
/// use route53_ddns::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Production clock using actual system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock frozen at a single instant.
///
/// Used by tests and by dry runs that want reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

/// Formats a time as `YYYY-MM-DD HH:MM:SS UTC+0000`.
///
/// This is the human-readable form stored in the audit TXT record.
#[must_use]
pub fn utc_timestamp(time: SystemTime) -> String {
    let utc: DateTime<Utc> = time.into();
    utc.format("%Y-%m-%d %H:%M:%S %Z%z").to_string()
}

/// Abstraction over asynchronous sleeping.
///
/// The retry loop sleeps through this trait so tests can record the
/// requested delays instead of actually waiting.
pub trait Sleeper: Send + Sync {
    /// Sleeps for the given duration.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Production sleeper backed by [`tokio::time::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

impl<S: Sleeper> Sleeper for &S {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await;
    }
}

/// Sleeper that records every requested delay and returns immediately.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSleeper {
    delays: std::sync::Mutex<Vec<Duration>>,
}

#[cfg(test)]
impl RecordingSleeper {
    pub(crate) fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}
