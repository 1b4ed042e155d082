//! Record state and change-batch value types.

use std::fmt;
use std::net::Ipv4Addr;

/// A public IPv4 address.
pub type Address = Ipv4Addr;

/// Record types this crate reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordType {
    /// IPv4 address record
    A,
    /// Text record used for the audit timestamp
    Txt,
}

impl RecordType {
    /// Returns the wire name of the record type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Change actions understood by the provider.
///
/// Only UPSERT is ever submitted, which makes resubmitting the same batch
/// harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    /// Create the record set, or replace it if it exists
    Upsert,
}

/// What the zone should contain for one hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredRecordState {
    /// Hostname without trailing dot
    pub hostname: String,
    /// Provider zone identifier
    pub zone_id: String,
    /// TTL in seconds, always positive
    pub ttl: u32,
    /// Address the A record must hold
    pub address: Address,
}

/// What the provider currently answers for one hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedRecordState {
    /// Hostname that was queried
    pub hostname: String,
    /// Published address, `None` when no A record exists
    pub address: Option<Address>,
}

/// A single record set change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChange {
    /// Change action
    pub action: ChangeAction,
    /// Fully qualified name, with trailing dot
    pub name: String,
    /// Record type
    pub record_type: RecordType,
    /// TTL in seconds
    pub ttl: u32,
    /// Record value exactly as sent to the provider
    pub value: String,
}

/// The A and TXT upserts submitted together for one hostname.
///
/// The provider applies the whole batch or none of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChangeBatch {
    /// Changes in submission order
    pub changes: Vec<RecordChange>,
}

impl RecordChangeBatch {
    /// Builds the batch for `desired`, stamping the TXT record with `timestamp`.
    #[must_use]
    pub fn for_desired(desired: &DesiredRecordState, timestamp: &str) -> Self {
        let name = fqdn(&desired.hostname);

        Self {
            changes: vec![
                RecordChange {
                    action: ChangeAction::Upsert,
                    name: name.clone(),
                    record_type: RecordType::A,
                    ttl: desired.ttl,
                    value: desired.address.to_string(),
                },
                RecordChange {
                    action: ChangeAction::Upsert,
                    name,
                    record_type: RecordType::Txt,
                    ttl: desired.ttl,
                    value: format!("\"Last updated: {timestamp}\""),
                },
            ],
        }
    }

    /// Returns the change for the given record type, if present.
    #[must_use]
    pub fn change(&self, record_type: RecordType) -> Option<&RecordChange> {
        self.changes.iter().find(|c| c.record_type == record_type)
    }
}

/// Normalizes a hostname to a fully qualified name with one trailing dot.
#[must_use]
pub fn fqdn(hostname: &str) -> String {
    format!("{}.", hostname.trim_end_matches('.'))
}
