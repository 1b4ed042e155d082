//! Idempotent A + TXT upsert.

use crate::time::{Clock, SystemClock, utc_timestamp};

use super::{DesiredRecordState, DnsError, DnsProvider, RecordChangeBatch};

/// Writes the desired A record and its audit TXT record in one batch.
///
/// # Dry-Run Mode
///
/// When `dry_run` is set the batch is built (and dumped in debug mode) but
/// never submitted. The call still succeeds; the skipped submission is only
/// visible in the logs.
#[derive(Debug)]
pub struct RecordUpdater<P, C = SystemClock> {
    provider: P,
    clock: C,
    dry_run: bool,
    debug: bool,
}

impl<P> RecordUpdater<P, SystemClock> {
    /// Creates a live updater stamping records with the system clock.
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            clock: SystemClock,
            dry_run: false,
            debug: false,
        }
    }
}

impl<P, C> RecordUpdater<P, C> {
    /// Replaces the clock used for the TXT timestamp.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> RecordUpdater<P, C2> {
        RecordUpdater {
            provider: self.provider,
            clock,
            dry_run: self.dry_run,
            debug: self.debug,
        }
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enables or disables dumping every change batch.
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Returns the provider this updater writes to.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns true if batches are never submitted.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl<P: DnsProvider, C: Clock> RecordUpdater<P, C> {
    /// Builds the change batch for `desired` and submits it unless in dry-run mode.
    ///
    /// Submitting the same desired state twice leaves the zone identical
    /// apart from the TXT timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::Update`] if the provider rejects the batch.
    pub async fn upsert(&self, desired: &DesiredRecordState) -> Result<(), DnsError> {
        let timestamp = utc_timestamp(self.clock.now());
        let batch = RecordChangeBatch::for_desired(desired, &timestamp);

        if self.debug {
            tracing::info!(
                "{}: change batch for zone {}: {batch:#?}",
                desired.hostname,
                desired.zone_id
            );
        }

        if self.dry_run {
            tracing::info!("{}: dry run enabled, not committing changes", desired.hostname);
            return Ok(());
        }

        let confirmation = self
            .provider
            .change_resource_record_sets(&desired.zone_id, &batch)
            .await
            .map_err(|source| DnsError::Update {
                hostname: desired.hostname.clone(),
                source,
            })?;

        tracing::info!(
            "{}: change submitted: {}",
            desired.hostname,
            confirmation.detail
        );
        Ok(())
    }
}
