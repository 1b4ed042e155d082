//! Transport failures.

use std::error::Error as StdError;

use thiserror::Error;

/// An HTTP exchange that did not produce a response.
///
/// Every variant counts as a failed attempt for the retry loop.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server could not be reached or dropped the connection.
    #[error("connection failed: {0}")]
    Unreachable(String),

    /// The client deadline passed before an answer arrived.
    #[error("request timed out")]
    Timeout,

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_builder() {
            Self::InvalidRequest(error_chain(&error))
        } else {
            Self::Unreachable(error_chain(&error))
        }
    }
}

/// Joins an error and its sources with `": "`.
///
/// reqwest keeps the useful part (refused, DNS failure) in the source chain.
pub(crate) fn error_chain(error: &dyn StdError) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
