//! Retry with exponential backoff.
//!
//! Both public address resolution and health-check delivery run through
//! [`Backoff`], configured by a [`RetryPolicy`].

mod error;
mod executor;
mod policy;

#[cfg(test)]
mod executor_tests;

pub use error::{AttemptError, RetryError};
pub use executor::Backoff;
pub use policy::RetryPolicy;
