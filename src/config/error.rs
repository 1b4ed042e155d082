//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Neither `[dns]` nor any `[zones.*]` host is configured.
    #[error("No hostnames configured: add a [dns] section or hosts under [zones.<name>]")]
    NoTargets,

    /// A hostname entry is incomplete or invalid.
    #[error("Invalid target '{target}': {reason}")]
    InvalidTarget {
        /// Where the entry was found, e.g. `zones.home` or `dns`
        target: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid URL provided.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid duration value (zero or too large).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid retry configuration.
    #[error("Invalid retry configuration: {0}")]
    InvalidRetry(String),

    /// The credentials file could not be used.
    #[error("Invalid credentials file '{}': {reason}", path.display())]
    InvalidCredentials {
        /// Path to the credentials file
        path: PathBuf,
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The configuration file path.
    pub const CONFIG: &str = "config";
    /// The `[dns]` hostname.
    pub const DNS_HOSTNAME: &str = "dns.hostname";
    /// The `[dns]` zone id.
    pub const DNS_ZONE_ID: &str = "dns.zone-id";
    /// The `[dns]` TTL.
    pub const DNS_TTL: &str = "dns.ttl";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }

    /// Creates an `InvalidTarget` error.
    #[must_use]
    pub fn target(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            target: target.into(),
            reason: reason.into(),
        }
    }
}
