//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde. Keys are
//! kebab-case (`zone-id`, `commit-changes`).

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// Sections other than the targets are optional and fall back to defaults.
/// Targets come from `[dns]` (single hostname) and/or `[zones.<name>]`
/// (several hostnames per zone).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TomlConfig {
    /// General behavior
    #[serde(default)]
    pub general: GeneralSection,

    /// AWS profile and region
    #[serde(default)]
    pub aws: AwsSection,

    /// Single hostname target
    pub dns: Option<DnsSection>,

    /// Multi-hostname targets keyed by an arbitrary zone name
    #[serde(default)]
    pub zones: BTreeMap<String, ZoneSection>,

    /// Health-check collector
    #[serde(default)]
    pub healthcheck: HealthcheckSection,

    /// Public address service
    #[serde(default)]
    pub public_ip: PublicIpSection,

    /// Retry policy configuration
    #[serde(default)]
    pub retry: RetrySection,
}

/// `[general]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct GeneralSection {
    /// Submit change batches; `false` means dry run
    pub commit_changes: Option<bool>,

    /// Update even when the address matches
    #[serde(default)]
    pub force_commit: bool,

    /// Logging options
    #[serde(default)]
    pub log: LogSection,
}

/// `[general.log]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// Verbose diagnostic output
    #[serde(default)]
    pub debug: bool,
}

/// `[aws]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsSection {
    /// Profile from the shared AWS config files
    pub profile: Option<String>,

    /// Region for the Route 53 client
    pub region: Option<String>,
}

/// `[dns]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DnsSection {
    /// Hostname to keep in sync
    pub hostname: Option<String>,

    /// Hosted zone id
    pub zone_id: Option<String>,

    /// TTL in seconds
    pub ttl: Option<u32>,
}

/// `[zones.<name>]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ZoneSection {
    /// Hosted zone id
    pub zone_id: Option<String>,

    /// TTL for hosts that do not set their own
    pub default_ttl: Option<u32>,

    /// Hostnames in this zone
    #[serde(default)]
    pub hosts: Vec<HostEntry>,
}

/// One entry of `zones.<name>.hosts`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostEntry {
    /// Hostname to keep in sync
    pub hostname: String,

    /// TTL in seconds, overriding the zone default
    pub ttl: Option<u32>,
}

/// `[healthcheck]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct HealthcheckSection {
    /// Check id; pings are disabled when absent
    pub id: Option<String>,

    /// Collector base URL
    pub base_url: Option<String>,
}

/// `[public-ip]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublicIpSection {
    /// Service returning the caller's address as plain text
    pub url: Option<String>,
}

/// `[retry]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RetrySection {
    /// Maximum number of attempts
    pub max_attempts: Option<u32>,

    /// Initial retry delay in seconds
    pub initial_delay: Option<u64>,

    /// Maximum retry delay in seconds
    pub max_delay: Option<u64>,

    /// Backoff multiplier
    pub multiplier: Option<f64>,

    /// Per-attempt timeout in seconds
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# route53-ddns configuration file

[general]
# Submit changes to Route 53; set to false for a dry run
commit-changes = true

# Update the records even when the address has not changed
force-commit = false

[general.log]
# Dump the configuration and every change batch
debug = false

[aws]
# Profile from ~/.aws/config (default: "default")
# profile = "default"

# Region for the Route 53 client (default: "us-west-2")
# region = "us-west-2"

[dns]
# Hostname to keep pointed at this host (required unless [zones] is used)
hostname = "home.example.com"
zone-id = "Z0123456789ABCDEFGHIJ"
ttl = 300

# Several hostnames can be managed per hosted zone
# [zones.example]
# zone-id = "Z0123456789ABCDEFGHIJ"
# default-ttl = 300
# hosts = [
#     { hostname = "a.example.com" },
#     { hostname = "b.example.com", ttl = 60 },
# ]

[healthcheck]
# healthchecks.io check id; pings are disabled when unset
# id = "00000000-0000-0000-0000-000000000000"
# base-url = "https://hc-ping.com"

[public-ip]
# Service returning the public address as plain text
# url = "http://checkip.amazonaws.com/"

[retry]
# Maximum number of attempts (default: 5)
# max-attempts = 5

# Initial retry delay in seconds (default: 1)
# initial-delay = 1

# Maximum retry delay in seconds (default: 60)
# max-delay = 60

# Backoff multiplier (default: 2.0)
# multiplier = 2.0

# Per-attempt timeout in seconds (default: 10)
# timeout = 10
"#
    .to_string()
}
