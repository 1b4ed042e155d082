//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// route53-ddns: keep a Route 53 A record pointed at this host
///
/// Runs a single reconciliation pass: resolves the public IPv4 address,
/// compares it with the published records and upserts them when needed.
#[derive(Debug, Parser)]
#[command(name = "route53-ddns")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    pub config: Option<PathBuf>,

    /// JSON file with AWS credentials or a profile name
    #[arg(long, short)]
    pub credentials: Option<PathBuf>,

    /// Build change batches without committing them
    #[arg(long)]
    pub dry_run: bool,

    /// Update records even when the address has not changed
    #[arg(long)]
    pub force_commit: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for route53-ddns
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "route53-ddns.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
