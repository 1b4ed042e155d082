//! route53-ddns: keep a Route 53 A record in sync with the public address.
//!
//! A single invocation runs one reconciliation pass: the public IPv4 address
//! is resolved, compared with what each configured hostname publishes, and
//! the A record (plus an audit TXT record) is upserted where they differ.
//! The outcome is reported to a healthchecks.io style collector.

pub mod address;
pub mod config;
pub mod dns;
pub mod healthcheck;
pub mod reconcile;
pub mod retry;
pub mod time;
pub mod transport;
