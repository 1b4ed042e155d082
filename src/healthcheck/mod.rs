//! Health-check pings.
//!
//! Reports the lifecycle of a synchronization pass to a healthchecks.io style
//! collector. Delivery is best effort: failures are retried with backoff and
//! then logged, never propagated.

mod error;
mod event;
mod notifier;


pub use error::HealthCheckError;
pub use event::HealthCheckEvent;
pub use notifier::{DEFAULT_BASE_URL, HealthCheck};
