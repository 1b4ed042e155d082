//! route53-ddns
//!
//! Entry point for the route53-ddns application.

use route53_ddns::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, log_level, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // The file decides the log level; validation warnings need logging set up
    let file = ValidatedConfig::read_file(&cli);
    let debug = file.as_ref().is_ok_and(|toml| toml.general.log.debug);
    setup_tracing(log_level(cli.verbose, debug));

    let config = match file.and_then(|toml| ValidatedConfig::from_file(&cli, &toml)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    tracing::info!("{config}");

    run_application(config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs one reconciliation pass with the given configuration.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: ValidatedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(_) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Synchronization failed: {e}");
            exit_code::runtime_error()
        }
    }
}
