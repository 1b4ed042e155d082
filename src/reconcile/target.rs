//! Inputs and results of a pass.

use crate::dns::{Address, DesiredRecordState};

/// Behavior switches for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Build change batches but never submit them
    pub dry_run: bool,
    /// Update even when the published address already matches
    pub force_commit: bool,
    /// Dump change batches
    pub debug: bool,
}

/// One hostname to keep in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Hostname without trailing dot
    pub hostname: String,
    /// Hosted zone containing the hostname
    pub zone_id: String,
    /// TTL for both records, in seconds
    pub ttl: u32,
}

impl Target {
    /// Combines this target with the resolved address.
    #[must_use]
    pub fn desired(&self, address: Address) -> DesiredRecordState {
        DesiredRecordState {
            hostname: self.hostname.clone(),
            zone_id: self.zone_id.clone(),
            ttl: self.ttl,
            address,
        }
    }
}

/// What happened to one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOutcome {
    /// The published address already matched
    Unchanged,
    /// The records were upserted (or would have been, in dry-run mode)
    Updated {
        /// Address published before the update
        previous: Option<Address>,
        /// True if the address already matched and force-commit applied
        forced: bool,
    },
}

/// Per-target line of a [`PassSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    /// Hostname of the target
    pub hostname: String,
    /// Outcome for the target
    pub outcome: TargetOutcome,
}

/// Result of a pass in which every target succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSummary {
    /// Resolved public address
    pub address: Address,
    /// Whether changes were withheld
    pub dry_run: bool,
    /// One report per target, in target order
    pub reports: Vec<TargetReport>,
}

impl PassSummary {
    /// Returns the hostnames that were updated.
    pub fn updated(&self) -> impl Iterator<Item = &str> {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, TargetOutcome::Updated { .. }))
            .map(|r| r.hostname.as_str())
    }
}
