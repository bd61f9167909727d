//! Stateful balance engine owned by a single user session.
//!
//! Holds the latest snapshot and its summary. Recomputation happens only
//! when the data layer reports a change through [`CollectionObserver`] or
//! when [`BalanceEngine::recompute`] is called.

use fintrack_shared::types::RecordId;
use rust_decimal::Decimal;

use super::observer::{CollectionObserver, CollectionUpdate, SummaryListener};
use super::service::BalanceService;
use super::types::{FinancialSummary, TransactionKind, ValidationResult};
use crate::snapshot::Snapshot;

/// Balance engine for one session.
#[derive(Default)]
pub struct BalanceEngine {
    snapshot: Snapshot,
    summary: FinancialSummary,
    listeners: Vec<Box<dyn SummaryListener>>,
}

impl std::fmt::Debug for BalanceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BalanceEngine")
            .field("snapshot", &self.snapshot)
            .field("summary", &self.summary)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl BalanceEngine {
    /// Creates an engine with every collection still loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine over an existing snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let summary = BalanceService::summarize(&snapshot);
        Self {
            snapshot,
            summary,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener notified after each recompute.
    pub fn subscribe(&mut self, listener: impl SummaryListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Latest summary.
    #[must_use]
    pub const fn summary(&self) -> FinancialSummary {
        self.summary
    }

    /// Latest available balance.
    #[must_use]
    pub const fn available_balance(&self) -> Decimal {
        self.summary.available_balance
    }

    /// Snapshot the summary was computed from.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Whether any collection is still loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.snapshot.is_loading()
    }

    /// Checks a proposed transaction against the current snapshot.
    ///
    /// Call on every change of the amount field and once more right before
    /// submitting; submission must be blocked while the result is invalid.
    #[must_use]
    pub fn validate(
        &self,
        amount: Decimal,
        kind: TransactionKind,
        exclude_id: Option<RecordId>,
    ) -> ValidationResult {
        BalanceService::validate_transaction(&self.snapshot, amount, kind, exclude_id)
    }

    /// Summary as if the record being edited did not exist.
    #[must_use]
    pub fn summary_excluding(&self, kind: TransactionKind, id: RecordId) -> FinancialSummary {
        BalanceService::compute_summary_excluding(&self.snapshot, kind, id)
    }

    /// Recomputes the summary from scratch and notifies listeners.
    pub fn recompute(&mut self) -> FinancialSummary {
        self.summary = BalanceService::summarize(&self.snapshot);

        tracing::debug!(
            income = %self.summary.total_income,
            expenses = %self.summary.total_expenses,
            savings = %self.summary.total_savings,
            loans_given = %self.summary.total_loans_given,
            loans_taken = %self.summary.total_loans_taken,
            available = %self.summary.available_balance,
            loading = self.snapshot.is_loading(),
            "Balance summary recomputed"
        );

        for listener in &mut self.listeners {
            listener.on_summary(&self.summary);
        }
        self.summary
    }

    /// Replaces the whole snapshot and recomputes.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) -> FinancialSummary {
        self.snapshot = snapshot;
        self.recompute()
    }
}

impl CollectionObserver for BalanceEngine {
    fn on_update(&mut self, update: CollectionUpdate) {
        tracing::trace!(collection = update.collection_name(), "Collection updated");

        match update {
            CollectionUpdate::Income(records) => self.snapshot.income = records,
            CollectionUpdate::Expenses(records) => self.snapshot.expenses = records,
            CollectionUpdate::Savings(records) => self.snapshot.savings = records,
            CollectionUpdate::Loans(records) => self.snapshot.loans = records,
        }
        self.recompute();
    }
}
