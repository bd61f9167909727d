//! Point-in-time view of a user's four record collections.
//!
//! Each collection is fetched independently, so any of them may still be
//! loading while the others are available. A loading collection reads as
//! empty everywhere in the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::balance::BalanceService;
use crate::records::{ExpenseRecord, IncomeRecord, LoanRecord, Record, RecordError, SavingRecord};

/// A collection that is either still loading or fully fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "records", rename_all = "snake_case")]
pub enum Collection<T> {
    /// Not fetched yet (or the fetch was cancelled).
    Loading,
    /// Fetched records, in no particular order.
    Loaded(Vec<T>),
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(records: Vec<T>) -> Self {
        Self::Loaded(records)
    }
}

impl<T> From<Option<Vec<T>>> for Collection<T> {
    fn from(records: Option<Vec<T>>) -> Self {
        records.map_or(Self::Loading, Self::Loaded)
    }
}

impl<T> Collection<T> {
    /// Returns the records, or an empty slice while loading.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Loading => &[],
            Self::Loaded(records) => records,
        }
    }

    /// Returns true while the collection has not been fetched.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// The four collections the balance engine aggregates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Income records.
    #[serde(default)]
    pub income: Collection<IncomeRecord>,
    /// Expense records.
    #[serde(default)]
    pub expenses: Collection<ExpenseRecord>,
    /// Saving records.
    #[serde(default)]
    pub savings: Collection<SavingRecord>,
    /// Loan records, given and taken.
    #[serde(default)]
    pub loans: Collection<LoanRecord>,
}

impl Snapshot {
    /// Creates a snapshot with all four collections loaded.
    #[must_use]
    pub fn loaded(
        income: Vec<IncomeRecord>,
        expenses: Vec<ExpenseRecord>,
        savings: Vec<SavingRecord>,
        loans: Vec<LoanRecord>,
    ) -> Self {
        Self {
            income: income.into(),
            expenses: expenses.into(),
            savings: savings.into(),
            loans: loans.into(),
        }
    }

    /// Returns true if any collection is still loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.income.is_loading()
            || self.expenses.is_loading()
            || self.savings.is_loading()
            || self.loans.is_loading()
    }

    /// Verifies that no record carries a negative amount and that every
    /// total fits in a `Decimal`.
    ///
    /// Records built through their constructors already satisfy the first
    /// part; the check exists for snapshots decoded from external data.
    ///
    /// # Errors
    ///
    /// Returns the first `RecordError::NegativeAmount` found, or
    /// `RecordError::TotalOutOfRange` if the totals overflow.
    pub fn check(&self) -> Result<(), RecordError> {
        check_items(self.income.items())?;
        check_items(self.expenses.items())?;
        check_items(self.savings.items())?;
        check_items(self.loans.items())?;

        if BalanceService::checked_summarize(self).is_none() {
            return Err(RecordError::TotalOutOfRange);
        }
        Ok(())
    }
}

fn check_items<R: Record>(records: &[R]) -> Result<(), RecordError> {
    match records.iter().find(|r| r.amount() < Decimal::ZERO) {
        Some(record) => Err(RecordError::NegativeAmount {
            id: record.id(),
            amount: record.amount(),
        }),
        None => Ok(()),
    }
}
