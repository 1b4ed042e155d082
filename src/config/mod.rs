//! Configuration layer for route53-ddns.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Credential selection ([`load_credentials`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! The configuration file is required and is the only source of targets,
//! AWS settings and retry tuning. The CLI adds the credentials file and
//! three switches.
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--dry-run`, `--force-commit`, `--verbose`) use OR semantics:
//! - `--dry-run` wins over `commit-changes = true`
//! - `--force-commit` wins over `force-commit = false`
//! - `--verbose` wins over `general.log.debug = false`
//!
//! Flags only enable; the file cannot be overridden towards committing.
//!
//! # Targets
//!
//! `[dns]` yields one target; every `[zones.<name>]` yields one target per
//! host, with `default-ttl` filling in missing per-host TTLs. Order is `[dns]`
//! first, then zones sorted by name, hosts in file order.

mod cli;
mod credentials;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use credentials::load_credentials;
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{AwsSettings, HealthcheckSettings, ValidatedConfig, write_default_config};
