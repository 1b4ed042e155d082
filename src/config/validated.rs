//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::dns::AwsCredentials;
use crate::reconcile::{RunOptions, Target};
use crate::retry::RetryPolicy;

use super::cli::Cli;
use super::credentials::load_credentials;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::{DnsSection, TomlConfig, ZoneSection};

/// AWS client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsSettings {
    /// Profile from the shared AWS config files
    pub profile: String,
    /// Region for the Route 53 client
    pub region: String,
}

/// Health-check collector settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthcheckSettings {
    /// Check id; `None` disables pings
    pub id: Option<String>,
    /// Collector base URL
    pub base_url: Url,
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and a parsed TOML
/// config, or [`ValidatedConfig::load`] to read both from disk.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Hostnames to reconcile, `[dns]` first, then zones by name
    pub targets: Vec<Target>,

    /// Dry-run, force-commit and debug switches
    pub options: RunOptions,

    /// AWS profile and region
    pub aws: AwsSettings,

    /// Credentials handed to the AWS SDK
    pub credentials: AwsCredentials,

    /// Health-check collector
    pub healthcheck: HealthcheckSettings,

    /// Public address service
    pub public_ip_url: Url,

    /// Retry policy for address resolution and health-check pings
    pub retry_policy: RetryPolicy,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let healthcheck = if self.healthcheck.id.is_some() {
            self.healthcheck.base_url.as_str()
        } else {
            "disabled"
        };

        write!(
            f,
            "Config {{ targets: {}, region: {}, profile: {}, dry_run: {}, force_commit: {}, \
             healthcheck: {}, retry: {}x/{}s }}",
            self.targets.len(),
            self.aws.region,
            self.aws.profile,
            self.options.dry_run,
            self.options.force_commit,
            healthcheck,
            self.retry_policy.max_attempts,
            self.retry_policy.initial_delay.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and TOML config.
    ///
    /// Boolean CLI flags can only enable behavior the file leaves off.
    /// Credentials are not loaded here; see [`ValidatedConfig::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No target is configured, or a target is incomplete
    /// - A TTL is zero
    /// - A URL is invalid
    /// - Retry settings are out of range
    pub fn from_raw(cli: &Cli, toml: &TomlConfig) -> Result<Self, ConfigError> {
        let targets = Self::build_targets(toml)?;

        let commit_changes = toml
            .general
            .commit_changes
            .unwrap_or(defaults::COMMIT_CHANGES);
        let options = RunOptions {
            dry_run: cli.dry_run || !commit_changes,
            force_commit: cli.force_commit || toml.general.force_commit,
            debug: cli.verbose || toml.general.log.debug,
        };

        let aws = AwsSettings {
            profile: non_empty_or(toml.aws.profile.as_deref(), defaults::AWS_PROFILE),
            region: non_empty_or(toml.aws.region.as_deref(), defaults::AWS_REGION),
        };

        let healthcheck = HealthcheckSettings {
            id: toml
                .healthcheck
                .id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            base_url: parse_url(
                toml.healthcheck
                    .base_url
                    .as_deref()
                    .unwrap_or(defaults::HEALTHCHECK_BASE_URL),
            )?,
        };

        let public_ip_url = parse_url(
            toml.public_ip
                .url
                .as_deref()
                .unwrap_or(defaults::PUBLIC_IP_URL),
        )?;

        let retry_policy = Self::build_retry_policy(toml)?;
        let credentials = AwsCredentials::Profile(aws.profile.clone());

        Ok(Self {
            targets,
            options,
            aws,
            credentials,
            healthcheck,
            public_ip_url,
            retry_policy,
        })
    }

    /// Reads the config file named on the command line.
    ///
    /// Split from [`ValidatedConfig::from_file`] so the caller can look at
    /// `general.log.debug` before logging is set up.
    ///
    /// # Errors
    ///
    /// Returns an error if no config file was given or it cannot be read or
    /// parsed.
    pub fn read_file(cli: &Cli) -> Result<TomlConfig, ConfigError> {
        let path = cli.config.as_deref().ok_or_else(|| {
            ConfigError::missing(field::CONFIG, "Pass the path to a configuration file")
        })?;
        TomlConfig::load(path)
    }

    /// Validates a parsed config file and selects credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged configuration is invalid or the
    /// credentials file is unusable.
    pub fn from_file(cli: &Cli, toml: &TomlConfig) -> Result<Self, ConfigError> {
        let mut config = Self::from_raw(cli, toml)?;
        config.credentials = load_credentials(cli.credentials.as_deref(), &config.aws.profile)?;
        Ok(config)
    }

    fn build_targets(toml: &TomlConfig) -> Result<Vec<Target>, ConfigError> {
        let mut targets = Vec::new();

        if let Some(dns) = &toml.dns {
            targets.push(Self::dns_target(dns)?);
        }

        for (name, zone) in &toml.zones {
            Self::zone_targets(name, zone, &mut targets)?;
        }

        if targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }

        Ok(targets)
    }

    fn dns_target(dns: &DnsSection) -> Result<Target, ConfigError> {
        let hostname = required(dns.hostname.as_deref()).ok_or_else(|| {
            ConfigError::missing(field::DNS_HOSTNAME, "Set hostname in the [dns] section")
        })?;
        let zone_id = required(dns.zone_id.as_deref()).ok_or_else(|| {
            ConfigError::missing(field::DNS_ZONE_ID, "Set zone-id in the [dns] section")
        })?;
        let ttl = dns
            .ttl
            .ok_or_else(|| ConfigError::missing(field::DNS_TTL, "Set ttl in the [dns] section"))?;

        Ok(Target {
            hostname: normalize_hostname(hostname),
            zone_id: zone_id.to_string(),
            ttl: validate_ttl("dns", ttl)?,
        })
    }

    fn zone_targets(
        name: &str,
        zone: &ZoneSection,
        targets: &mut Vec<Target>,
    ) -> Result<(), ConfigError> {
        let location = format!("zones.{name}");

        let zone_id = required(zone.zone_id.as_deref())
            .ok_or_else(|| ConfigError::target(&location, "zone-id is required"))?;

        if zone.hosts.is_empty() {
            tracing::warn!("{location} has no hosts");
        }

        for host in &zone.hosts {
            let hostname = required(Some(host.hostname.as_str()))
                .ok_or_else(|| ConfigError::target(&location, "hostname must not be empty"))?;
            let ttl = host.ttl.or(zone.default_ttl).ok_or_else(|| {
                ConfigError::target(
                    &location,
                    format!("{hostname} has no ttl and the zone has no default-ttl"),
                )
            })?;

            targets.push(Target {
                hostname: normalize_hostname(hostname),
                zone_id: zone_id.to_string(),
                ttl: validate_ttl(&location, ttl)?,
            });
        }

        Ok(())
    }

    fn build_retry_policy(toml: &TomlConfig) -> Result<RetryPolicy, ConfigError> {
        let retry = &toml.retry;

        let max_attempts = retry.max_attempts.unwrap_or(defaults::RETRY_MAX_ATTEMPTS);
        let initial_delay_secs = retry
            .initial_delay
            .unwrap_or(defaults::RETRY_INITIAL_DELAY_SECS);
        let max_delay_secs = retry.max_delay.unwrap_or(defaults::RETRY_MAX_DELAY_SECS);
        let multiplier = retry.multiplier.unwrap_or(defaults::RETRY_MULTIPLIER);
        let timeout_secs = retry.timeout.unwrap_or(defaults::RETRY_TIMEOUT_SECS);

        if max_attempts == 0 {
            return Err(ConfigError::InvalidRetry(
                "max-attempts must be greater than 0".to_string(),
            ));
        }

        if initial_delay_secs == 0 {
            return Err(ConfigError::InvalidRetry(
                "initial-delay must be greater than 0".to_string(),
            ));
        }

        if multiplier <= 0.0 || !multiplier.is_finite() {
            return Err(ConfigError::InvalidRetry(
                "multiplier must be a positive finite number".to_string(),
            ));
        }

        if max_delay_secs < initial_delay_secs {
            return Err(ConfigError::InvalidRetry(format!(
                "max-delay ({max_delay_secs}s) must be >= initial-delay ({initial_delay_secs}s)"
            )));
        }

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "retry.timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(RetryPolicy::new()
            .with_max_attempts(max_attempts)
            .with_initial_delay(Duration::from_secs(initial_delay_secs))
            .with_max_delay(Duration::from_secs(max_delay_secs))
            .with_multiplier(multiplier)
            .with_attempt_timeout(Duration::from_secs(timeout_secs)))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    required(value).unwrap_or(default).to_string()
}

fn normalize_hostname(hostname: &str) -> String {
    hostname.trim_end_matches('.').to_string()
}

fn validate_ttl(location: &str, ttl: u32) -> Result<u32, ConfigError> {
    if ttl == 0 {
        return Err(ConfigError::target(location, "ttl must be greater than 0"));
    }
    Ok(ttl)
}

fn parse_url(url: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
