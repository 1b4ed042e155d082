//! Error types for health-check delivery.

use thiserror::Error;

use crate::transport::HttpError;

/// Error from a single delivery attempt.
#[derive(Debug, Error)]
pub enum HealthCheckError {
    /// The ping request could not be completed.
    #[error("health-check request failed: {0}")]
    Http(#[from] HttpError),

    /// The collector answered with something other than 200 OK.
    #[error("health-check collector returned {status}")]
    Status {
        /// Status code returned by the collector
        status: http::StatusCode,
    },

    /// The ping URL could not be built from the base URL and job id.
    #[error("invalid health-check URL: {0}")]
    InvalidUrl(String),
}
