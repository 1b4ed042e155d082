//! Error types for a reconciliation pass.

use thiserror::Error;

use crate::address::ResolveError;
use crate::dns::DnsError;
use crate::retry::RetryError;

use super::PassSummary;

/// Why a reconciliation pass failed.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The public address could not be determined; no target was touched.
    #[error("could not determine public IP address: {0}")]
    Resolution(#[source] RetryError<ResolveError>),

    /// At least one target failed; the others were still reconciled.
    #[error("{} of {total} target(s) failed", .errors.len())]
    Targets {
        /// Number of targets in the pass
        total: usize,
        /// One error per failed target, in target order
        errors: Vec<DnsError>,
        /// Reports of the targets that did succeed
        partial: PassSummary,
    },
}
