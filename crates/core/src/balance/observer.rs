//! Change notifications between the data layer and the engine.

use super::types::FinancialSummary;
use crate::records::{ExpenseRecord, IncomeRecord, LoanRecord, SavingRecord};
use crate::snapshot::Collection;

/// A replacement for one of the four collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionUpdate {
    /// Income collection changed.
    Income(Collection<IncomeRecord>),
    /// Expense collection changed.
    Expenses(Collection<ExpenseRecord>),
    /// Saving collection changed.
    Savings(Collection<SavingRecord>),
    /// Loan collection changed.
    Loans(Collection<LoanRecord>),
}

impl CollectionUpdate {
    /// Name of the collection this update replaces.
    #[must_use]
    pub const fn collection_name(&self) -> &'static str {
        match self {
            Self::Income(_) => "income",
            Self::Expenses(_) => "expenses",
            Self::Savings(_) => "savings",
            Self::Loans(_) => "loans",
        }
    }
}

/// Receives collection changes from the data layer.
pub trait CollectionObserver {
    /// Called after a collection was added to, edited, removed from, or refetched.
    fn on_update(&mut self, update: CollectionUpdate);
}

/// Receives every freshly computed summary.
pub trait SummaryListener {
    /// Called once per recompute.
    fn on_summary(&mut self, summary: &FinancialSummary);
}

impl<F> SummaryListener for F
where
    F: FnMut(&FinancialSummary),
{
    fn on_summary(&mut self, summary: &FinancialSummary) {
        self(summary);
    }
}
