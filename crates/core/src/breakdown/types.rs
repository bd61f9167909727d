//! Chart data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Calendar month key, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// The month.
    pub month: YearMonth,
    /// Income received.
    pub income: Decimal,
    /// Expenses paid.
    pub expenses: Decimal,
    /// Money set aside.
    pub savings: Decimal,
    /// Loans given.
    pub loans_given: Decimal,
    /// Loans taken.
    pub loans_taken: Decimal,
}

impl MonthlyTotals {
    /// Empty totals for a month.
    #[must_use]
    pub const fn empty(month: YearMonth) -> Self {
        Self {
            month,
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
            savings: Decimal::ZERO,
            loans_given: Decimal::ZERO,
            loans_taken: Decimal::ZERO,
        }
    }

    /// Income plus loans taken.
    #[must_use]
    pub fn inflow(&self) -> Decimal {
        self.income.saturating_add(self.loans_taken)
    }

    /// Expenses, savings, and loans given.
    #[must_use]
    pub fn outflow(&self) -> Decimal {
        self.expenses
            .saturating_add(self.savings)
            .saturating_add(self.loans_given)
    }

    /// Inflow minus outflow.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.inflow().saturating_sub(self.outflow())
    }
}

/// Cash flow chart data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowChart {
    /// Labels (`YYYY-MM`).
    pub labels: Vec<String>,
    /// Inflow amounts.
    pub inflow: Vec<Decimal>,
    /// Outflow amounts.
    pub outflow: Vec<Decimal>,
}

impl From<&[MonthlyTotals]> for CashFlowChart {
    fn from(months: &[MonthlyTotals]) -> Self {
        Self {
            labels: months.iter().map(|m| m.month.to_string()).collect(),
            inflow: months.iter().map(MonthlyTotals::inflow).collect(),
            outflow: months.iter().map(MonthlyTotals::outflow).collect(),
        }
    }
}
