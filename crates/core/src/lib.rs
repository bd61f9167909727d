//! Core business logic for Fintrack.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! The data layer hands it snapshots of a user's records; the presentation
//! layer reads summaries and validation results back out.
//!
//! # Modules
//!
//! - `records` - Income, expense, saving, and loan records
//! - `snapshot` - Collections that may still be loading
//! - `balance` - Summary computation and transaction gating
//! - `breakdown` - Monthly totals for charts

pub mod balance;
pub mod breakdown;
pub mod records;
pub mod snapshot;

pub use balance::{
    BalanceEngine, BalanceService, CollectionObserver, CollectionUpdate, FinancialSummary,
    SummaryListener, TransactionKind, ValidationResult,
};
pub use snapshot::{Collection, Snapshot};
