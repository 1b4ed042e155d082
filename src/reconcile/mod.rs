//! One reconciliation pass.
//!
//! This module provides:
//! - The pure comparison of desired and observed state ([`evaluate`])
//! - The pass driver ([`Reconciler`]) resolving the public address once and
//!   reconciling every configured [`Target`] in order

mod decision;
mod error;
mod reconciler;
mod target;


pub use decision::{ReconciliationVerdict, evaluate};
pub use error::ReconcileError;
pub use reconciler::Reconciler;
pub use target::{PassSummary, RunOptions, Target, TargetOutcome, TargetReport};
