//! Default values for configuration options.

pub use crate::address::DEFAULT_PUBLIC_IP_URL as PUBLIC_IP_URL;
pub use crate::dns::{DEFAULT_PROFILE as AWS_PROFILE, DEFAULT_REGION as AWS_REGION};
pub use crate::healthcheck::DEFAULT_BASE_URL as HEALTHCHECK_BASE_URL;

/// Whether changes are committed when `general.commit-changes` is absent.
pub const COMMIT_CHANGES: bool = true;

/// Default maximum number of attempts.
pub const RETRY_MAX_ATTEMPTS: u32 = 5;

/// Default initial retry delay in seconds.
pub const RETRY_INITIAL_DELAY_SECS: u64 = 1;

/// Default maximum retry delay in seconds.
pub const RETRY_MAX_DELAY_SECS: u64 = 60;

/// Default retry backoff multiplier.
pub const RETRY_MULTIPLIER: f64 = 2.0;

/// Default per-attempt timeout in seconds.
pub const RETRY_TIMEOUT_SECS: u64 = 10;
