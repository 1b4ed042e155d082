//! Errors from reading or updating records.

use thiserror::Error;

use super::ProviderError;

/// Error from the record reader or updater.
///
/// All variants are fatal for the hostname concerned; none are retried.
#[derive(Debug, Error)]
pub enum DnsError {
    /// The provider could not be asked for the current record.
    #[error("{hostname}: provider query failed: {source}")]
    Query {
        /// Hostname being read
        hostname: String,
        /// Provider failure
        #[source]
        source: ProviderError,
    },

    /// The provider answered with something that is not an IPv4 address.
    #[error("{hostname}: provider answered with a malformed A value {value:?}")]
    MalformedAnswer {
        /// Hostname being read
        hostname: String,
        /// Value returned by the provider
        value: String,
    },

    /// The provider rejected the change batch.
    #[error("{hostname}: update rejected: {source}")]
    Update {
        /// Hostname being updated
        hostname: String,
        /// Provider failure
        #[source]
        source: ProviderError,
    },
}
