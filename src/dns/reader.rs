//! Reads the address a zone currently publishes for a hostname.

use std::net::Ipv4Addr;

use super::{DnsError, DnsProvider, ObservedRecordState, RecordType};

/// Reads the A record the provider would serve for `hostname`.
///
/// An empty answer is the normal state of a never-configured hostname and is
/// reported as `address: None`. Only the first value of a multi-value answer
/// is considered.
///
/// # Errors
///
/// Returns [`DnsError::Query`] when the provider cannot be queried and
/// [`DnsError::MalformedAnswer`] when the first value is not an IPv4 address.
pub async fn read_observed<P: DnsProvider>(
    provider: &P,
    zone_id: &str,
    hostname: &str,
) -> Result<ObservedRecordState, DnsError> {
    let values = provider
        .test_dns_answer(zone_id, hostname, RecordType::A)
        .await
        .map_err(|source| DnsError::Query {
            hostname: hostname.to_string(),
            source,
        })?;

    let address = match values.first() {
        None => {
            tracing::info!("{hostname}: no configured IP address found");
            None
        }
        Some(value) => {
            let address = value.trim().parse::<Ipv4Addr>().map_err(|_| {
                DnsError::MalformedAnswer {
                    hostname: hostname.to_string(),
                    value: value.clone(),
                }
            })?;
            tracing::info!("{hostname}: found configured IP address {address}");
            Some(address)
        }
    };

    Ok(ObservedRecordState {
        hostname: hostname.to_string(),
        address,
    })
}
