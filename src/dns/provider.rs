//! The DNS provider capability.

use thiserror::Error;

use super::{RecordChangeBatch, RecordType};

/// Error reported by a provider client.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider API returned an error or could not be reached.
    #[error("provider API error: {0}")]
    Api(String),

    /// A request could not be assembled from the given values.
    #[error("invalid provider request: {0}")]
    InvalidRequest(String),
}

/// Acknowledgement of an accepted change batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeConfirmation {
    /// Provider-specific description of the accepted change
    pub detail: String,
}

/// A DNS provider offering a dry-run resolution and an atomic change batch.
///
/// Implementations are stateless between calls; a failed call must leave the
/// client usable for the next hostname.
pub trait DnsProvider: Send + Sync {
    /// Asks the authoritative zone what it would answer for `record_name`.
    ///
    /// This is not a live DNS lookup; it reflects the zone contents directly.
    /// An empty list means the zone has no such record.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the provider cannot be queried.
    fn test_dns_answer(
        &self,
        zone_id: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> impl std::future::Future<Output = Result<Vec<String>, ProviderError>> + Send;

    /// Submits `batch` as one atomic change set.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the provider rejects the batch; nothing
    /// from the batch has been applied in that case.
    fn change_resource_record_sets(
        &self,
        zone_id: &str,
        batch: &RecordChangeBatch,
    ) -> impl std::future::Future<Output = Result<ChangeConfirmation, ProviderError>> + Send;
}

impl<P: DnsProvider> DnsProvider for std::sync::Arc<P> {
    async fn test_dns_answer(
        &self,
        zone_id: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, ProviderError> {
        (**self)
            .test_dns_answer(zone_id, record_name, record_type)
            .await
    }

    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        batch: &RecordChangeBatch,
    ) -> Result<ChangeConfirmation, ProviderError> {
        (**self).change_resource_record_sets(zone_id, batch).await
    }
}
