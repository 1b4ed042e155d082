//! HTTP health-check notifier.

use crate::retry::{Backoff, RetryPolicy};
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{HttpClient, HttpRequest};

use super::{HealthCheckError, HealthCheckEvent};

/// Default collector base URL.
pub const DEFAULT_BASE_URL: &str = "https://hc-ping.com";

/// Sends lifecycle pings for one health-check job.
///
/// Ping URLs are `<base>/<job-id>` for success and `<base>/<job-id>/<action>`
/// otherwise. `Start`, `Success` and `Fail` are sent as GET; `Log` carries its
/// message as a POST body.
///
/// A notifier without a job id is disabled and sends nothing.
///
/// # Example
///
/// ```
/// use route53_ddns::healthcheck::{DEFAULT_BASE_URL, HealthCheck};
/// use route53_ddns::transport::ReqwestClient;
/// use url::Url;
///
/// let notifier = HealthCheck::new(
///     ReqwestClient::new(),
///     Url::parse(DEFAULT_BASE_URL).unwrap(),
///     Some("5f1c0a7e-0000-4000-8000-000000000000".to_string()),
/// );
/// assert!(notifier.is_enabled());
/// ```
#[derive(Debug)]
pub struct HealthCheck<H, S = TokioSleeper> {
    client: H,
    base_url: url::Url,
    job_id: Option<String>,
    backoff: Backoff<S>,
}

impl<H> HealthCheck<H, TokioSleeper> {
    /// Creates a notifier with the default retry policy.
    #[must_use]
    pub fn new(client: H, base_url: url::Url, job_id: Option<String>) -> Self {
        Self {
            client,
            base_url,
            job_id,
            backoff: Backoff::new(RetryPolicy::new()),
        }
    }
}

impl<H, S> HealthCheck<H, S> {
    /// Replaces the retry executor.
    ///
    /// Tests use this to swap in a sleeper that does not wait.
    #[must_use]
    pub fn with_backoff<S2>(self, backoff: Backoff<S2>) -> HealthCheck<H, S2> {
        HealthCheck {
            client: self.client,
            base_url: self.base_url,
            job_id: self.job_id,
            backoff,
        }
    }

    /// Returns true if a job id is configured.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.job_id.is_some()
    }

    /// Builds the ping URL for `event`.
    ///
    /// # Errors
    ///
    /// Returns [`HealthCheckError::InvalidUrl`] if the notifier is disabled or
    /// the joined URL does not parse.
    pub fn url_for(&self, event: &HealthCheckEvent) -> Result<url::Url, HealthCheckError> {
        let job_id = self
            .job_id
            .as_deref()
            .ok_or_else(|| HealthCheckError::InvalidUrl("no job id configured".to_string()))?;

        let base = self.base_url.as_str().trim_end_matches('/');
        let raw = match event.action() {
            Some(action) => format!("{base}/{job_id}/{action}"),
            None => format!("{base}/{job_id}"),
        };

        url::Url::parse(&raw).map_err(|e| HealthCheckError::InvalidUrl(format!("{raw}: {e}")))
    }
}

impl<H: HttpClient, S: Sleeper> HealthCheck<H, S> {
    /// Reports that the pass has started.
    pub async fn start(&self) {
        self.notify(HealthCheckEvent::Start).await;
    }

    /// Reports that the pass succeeded.
    pub async fn success(&self) {
        self.notify(HealthCheckEvent::Success).await;
    }

    /// Reports that the pass failed.
    pub async fn fail(&self) {
        self.notify(HealthCheckEvent::Fail).await;
    }

    /// Attaches a message to the check.
    pub async fn log(&self, message: impl Into<String>) {
        self.notify(HealthCheckEvent::Log(message.into())).await;
    }

    /// Delivers `event`, retrying with backoff.
    ///
    /// Never fails: exhaustion is logged at `warn` and dropped.
    pub async fn notify(&self, event: HealthCheckEvent) {
        if !self.is_enabled() {
            tracing::debug!("Health check disabled, skipping {} ping", event.name());
            return;
        }

        let request = match self.url_for(&event) {
            Ok(url) => build_request(url, &event),
            Err(e) => {
                tracing::warn!("Skipping {} ping: {e}", event.name());
                return;
            }
        };

        let label = format!("health-check {} ping", event.name());
        let result = self
            .backoff
            .execute(&label, || self.send_once(request.clone()))
            .await;

        match result {
            Ok(()) => tracing::debug!("Sent {} ping to {}", event.name(), request.url),
            Err(e) => tracing::warn!("Failed to send {} ping: {e}", event.name()),
        }
    }

    async fn send_once(&self, request: HttpRequest) -> Result<(), HealthCheckError> {
        let response = self.client.request(request).await?;
        if response.status == http::StatusCode::OK {
            Ok(())
        } else {
            Err(HealthCheckError::Status {
                status: response.status,
            })
        }
    }
}

fn build_request(url: url::Url, event: &HealthCheckEvent) -> HttpRequest {
    match event {
        HealthCheckEvent::Log(message) if !message.is_empty() => {
            HttpRequest::post_text(url, message.as_str())
        }
        _ => HttpRequest::get(url),
    }
}
