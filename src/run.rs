//! Application execution logic.
//!
//! Builds the production collaborators from the validated configuration and
//! runs one reconciliation pass framed by health-check pings.

use thiserror::Error;

use route53_ddns::address::{AddressResolver, HttpAddressResolver};
use route53_ddns::config::ValidatedConfig;
use route53_ddns::dns::{DnsProvider, Route53Provider};
use route53_ddns::healthcheck::HealthCheck;
use route53_ddns::reconcile::{PassSummary, ReconcileError, Reconciler, Target, TargetOutcome};
use route53_ddns::retry::Backoff;
use route53_ddns::time::{Clock, Sleeper};
use route53_ddns::transport::{HttpClient, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The reconciliation pass failed.
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

/// Executes one reconciliation pass.
///
/// This function:
/// 1. Creates the HTTP client, address resolver and health-check notifier
/// 2. Loads AWS configuration and creates the Route 53 client
/// 3. Runs the pass over every configured target
///
/// # Errors
///
/// Returns an error if the public address cannot be resolved or any target
/// fails.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it talks to AWS.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<PassSummary, RunError> {
    if config.options.debug {
        tracing::info!("Loaded configuration: {config:#?}");
    }
    if config.options.dry_run {
        tracing::info!("Dry-run mode enabled - changes will be logged but not committed");
    }

    let client = ReqwestClient::new();
    let backoff = Backoff::new(config.retry_policy.clone());

    let notifier = HealthCheck::new(
        client.clone(),
        config.healthcheck.base_url.clone(),
        config.healthcheck.id.clone(),
    )
    .with_backoff(backoff.clone());

    let resolver = HttpAddressResolver::new(client, config.public_ip_url.clone());
    let provider = Route53Provider::connect(&config.aws.region, &config.credentials).await;
    let reconciler = Reconciler::new(resolver, provider, config.options).with_backoff(backoff);

    run_pass(&reconciler, &notifier, &config.targets).await
}

/// Runs `reconciler` over `targets`, reporting start and outcome to `notifier`.
///
/// Updated hostnames are also sent as a log ping before the success or fail
/// ping, including those updated in a pass where other targets failed.
/// Health-check delivery never changes the result.
///
/// # Errors
///
/// Returns [`RunError::Reconcile`] if the pass failed.
pub async fn run_pass<R, P, C, S, H, HS>(
    reconciler: &Reconciler<R, P, C, S>,
    notifier: &HealthCheck<H, HS>,
    targets: &[Target],
) -> Result<PassSummary, RunError>
where
    R: AddressResolver,
    P: DnsProvider,
    C: Clock,
    S: Sleeper,
    H: HttpClient,
    HS: Sleeper,
{
    notifier.start().await;

    match reconciler.run(targets).await {
        Ok(summary) => {
            report_updates(notifier, &summary).await;
            notifier.success().await;
            Ok(summary)
        }
        Err(e) => {
            if let ReconcileError::Targets { partial, .. } = &e {
                report_updates(notifier, partial).await;
            }
            notifier.fail().await;
            Err(e.into())
        }
    }
}

async fn report_updates<H: HttpClient, S: Sleeper>(
    notifier: &HealthCheck<H, S>,
    summary: &PassSummary,
) {
    if let Some(message) = update_message(summary) {
        tracing::info!("{message}");
        notifier.log(message).await;
    }
}

/// Describes the updates of a pass, or `None` if nothing was updated.
fn update_message(summary: &PassSummary) -> Option<String> {
    let lines: Vec<String> = summary
        .reports
        .iter()
        .filter_map(|report| match report.outcome {
            TargetOutcome::Unchanged => None,
            TargetOutcome::Updated { previous, forced } => {
                let previous = previous.map_or_else(|| "none".to_string(), |a| a.to_string());
                let forced = if forced { " (forced)" } else { "" };
                Some(format!(
                    "{}: {previous} -> {}{forced}",
                    report.hostname, summary.address
                ))
            }
        })
        .collect();

    if lines.is_empty() {
        return None;
    }

    let verb = if summary.dry_run {
        "Would update"
    } else {
        "Updated"
    };
    Some(format!("{verb} {} record(s):\n{}", lines.len(), lines.join("\n")))
}
