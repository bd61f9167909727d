//! Balance aggregation and transaction gating.
//!
//! This module implements:
//! - Financial summary computation over a snapshot
//! - Edit-aware summaries that exclude one existing record
//! - Validation of proposed outflows against the available balance
//! - A session engine that recomputes on collection changes

pub mod engine;
pub mod observer;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use engine::BalanceEngine;
pub use observer::{CollectionObserver, CollectionUpdate, SummaryListener};
pub use service::BalanceService;
pub use types::{FinancialSummary, TransactionKind, ValidationResult};
