//! DNS record model and provider access.
//!
//! This module provides:
//! - Record value types ([`DesiredRecordState`], [`RecordChangeBatch`], ...)
//! - The provider capability ([`DnsProvider`]) and its Route 53 client
//! - The observed-state reader ([`read_observed`]) and the upserting [`RecordUpdater`]

mod error;
mod provider;
mod reader;
mod records;
mod route53;
mod updater;

#[cfg(test)]
pub(crate) mod mock;


pub use error::DnsError;
pub use provider::{ChangeConfirmation, DnsProvider, ProviderError};
pub use reader::read_observed;
pub use records::{
    Address, ChangeAction, DesiredRecordState, ObservedRecordState, RecordChange,
    RecordChangeBatch, RecordType, fqdn,
};
pub use route53::{AwsCredentials, DEFAULT_PROFILE, DEFAULT_REGION, Route53Provider};
pub use updater::RecordUpdater;
