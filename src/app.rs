//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use route53_ddns::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0), including passes where nothing needed updating.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable file, missing fields, bad credentials file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - address resolution or Route 53 failure.
    ///
    /// A function because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::CONFIG => {
            eprintln!("\nUsage: route53-ddns <CONFIG> [--credentials <FILE>]");
            eprintln!("Run 'route53-ddns init' to generate a configuration template.");
        }
        ConfigError::FileRead { .. } | ConfigError::NoTargets => {
            eprintln!("\nRun 'route53-ddns init' to generate a configuration template.");
        }
        ConfigError::InvalidCredentials { .. } => {
            eprintln!(
                "\nThe credentials file must hold aws_access_key_id and \
                 aws_secret_access_key, or profile_name."
            );
        }
        _ => {}
    }
}

/// Default log level: DEBUG when `--verbose` or `general.log.debug` is set.
pub const fn log_level(verbose: bool, debug: bool) -> Level {
    if verbose || debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Sets up the tracing subscriber for logging.
///
/// `RUST_LOG` still overrides `level`.
pub fn setup_tracing(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
