//! The pass driver.

use crate::address::AddressResolver;
use crate::dns::{Address, DnsError, DnsProvider, RecordUpdater, read_observed};
use crate::retry::{Backoff, RetryPolicy};
use crate::time::{Clock, Sleeper, SystemClock, TokioSleeper};

use super::{
    PassSummary, ReconcileError, ReconciliationVerdict, RunOptions, Target, TargetOutcome,
    TargetReport, evaluate,
};

/// Drives one reconciliation pass over a list of targets.
///
/// The public address is resolved once, through the backoff executor. Each
/// target is then read, compared and, if needed, upserted. Targets are handled
/// strictly in order; a failed target is logged and the pass moves on.
///
/// # Type Parameters
///
/// - `R`: The public address resolver
/// - `P`: The DNS provider
/// - `C`: The clock used for audit timestamps (defaults to [`SystemClock`])
/// - `S`: The sleeper used between resolution attempts (defaults to [`TokioSleeper`])
#[derive(Debug)]
pub struct Reconciler<R, P, C = SystemClock, S = TokioSleeper> {
    resolver: R,
    updater: RecordUpdater<P, C>,
    backoff: Backoff<S>,
    options: RunOptions,
}

impl<R, P> Reconciler<R, P> {
    /// Creates a reconciler with the default retry policy.
    #[must_use]
    pub fn new(resolver: R, provider: P, options: RunOptions) -> Self {
        Self {
            resolver,
            updater: RecordUpdater::new(provider)
                .with_dry_run(options.dry_run)
                .with_debug(options.debug),
            backoff: Backoff::new(RetryPolicy::new()),
            options,
        }
    }
}

impl<R, P, C, S> Reconciler<R, P, C, S> {
    /// Replaces the clock used for audit timestamps.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> Reconciler<R, P, C2, S> {
        Reconciler {
            resolver: self.resolver,
            updater: self.updater.with_clock(clock),
            backoff: self.backoff,
            options: self.options,
        }
    }

    /// Replaces the retry executor used for address resolution.
    #[must_use]
    pub fn with_backoff<S2>(self, backoff: Backoff<S2>) -> Reconciler<R, P, C, S2> {
        Reconciler {
            resolver: self.resolver,
            updater: self.updater,
            backoff,
            options: self.options,
        }
    }

    /// Returns the record updater.
    #[must_use]
    pub const fn updater(&self) -> &RecordUpdater<P, C> {
        &self.updater
    }
}

impl<R, P, C, S> Reconciler<R, P, C, S>
where
    R: AddressResolver,
    P: DnsProvider,
    C: Clock,
    S: Sleeper,
{
    /// Runs the pass over `targets`.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::Resolution`] if the public address could not
    /// be resolved within the retry policy, and [`ReconcileError::Targets`] if
    /// any target failed.
    pub async fn run(&self, targets: &[Target]) -> Result<PassSummary, ReconcileError> {
        let address = self
            .backoff
            .execute("public IP lookup", || self.resolver.resolve())
            .await
            .map_err(ReconcileError::Resolution)?;
        tracing::info!("Public IP address is {address}");

        let mut reports = Vec::with_capacity(targets.len());
        let mut errors = Vec::new();

        for target in targets {
            match self.reconcile_target(target, address).await {
                Ok(outcome) => reports.push(TargetReport {
                    hostname: target.hostname.clone(),
                    outcome,
                }),
                Err(e) => {
                    tracing::error!("{e}");
                    errors.push(e);
                }
            }
        }

        let summary = PassSummary {
            address,
            dry_run: self.updater.is_dry_run(),
            reports,
        };

        if errors.is_empty() {
            Ok(summary)
        } else {
            Err(ReconcileError::Targets {
                total: targets.len(),
                errors,
                partial: summary,
            })
        }
    }

    async fn reconcile_target(
        &self,
        target: &Target,
        address: Address,
    ) -> Result<TargetOutcome, DnsError> {
        let observed =
            read_observed(self.updater.provider(), &target.zone_id, &target.hostname).await?;

        let forced = match evaluate(address, observed.address) {
            ReconciliationVerdict::Mismatch(_) => {
                tracing::info!("{}: IP address needs to be updated to {address}", target.hostname);
                false
            }
            ReconciliationVerdict::Match if self.options.force_commit => {
                tracing::info!("{}: IP address is up to date, forcing update", target.hostname);
                true
            }
            ReconciliationVerdict::Match => {
                tracing::info!("{}: IP address is up to date", target.hostname);
                return Ok(TargetOutcome::Unchanged);
            }
        };

        self.updater.upsert(&target.desired(address)).await?;

        Ok(TargetOutcome::Updated {
            previous: observed.address,
            forced,
        })
    }
}
