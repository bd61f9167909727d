//! Balance data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated totals over a snapshot.
///
/// Always derived, never stored: recompute it whenever a collection changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of all income.
    pub total_income: Decimal,
    /// Sum of all expenses.
    pub total_expenses: Decimal,
    /// Sum of loans given to others.
    pub total_loans_given: Decimal,
    /// Sum of loans taken from others.
    pub total_loans_taken: Decimal,
    /// Sum of all savings.
    pub total_savings: Decimal,
    /// income + loans taken - expenses - loans given - savings.
    pub available_balance: Decimal,
}

impl FinancialSummary {
    /// Builds a summary from its five totals, deriving the available balance.
    ///
    /// Arithmetic saturates at the `Decimal` bounds. Use
    /// [`FinancialSummary::checked_from_totals`] to detect totals that do not
    /// fit.
    #[must_use]
    pub fn from_totals(
        total_income: Decimal,
        total_expenses: Decimal,
        total_loans_given: Decimal,
        total_loans_taken: Decimal,
        total_savings: Decimal,
    ) -> Self {
        Self {
            total_income,
            total_expenses,
            total_loans_given,
            total_loans_taken,
            total_savings,
            available_balance: total_income
                .saturating_add(total_loans_taken)
                .saturating_sub(total_expenses)
                .saturating_sub(total_loans_given)
                .saturating_sub(total_savings),
        }
    }

    /// Like [`FinancialSummary::from_totals`], but returns `None` when the
    /// inflow, the outflow, or the available balance overflows.
    #[must_use]
    pub fn checked_from_totals(
        total_income: Decimal,
        total_expenses: Decimal,
        total_loans_given: Decimal,
        total_loans_taken: Decimal,
        total_savings: Decimal,
    ) -> Option<Self> {
        let inflow = total_income.checked_add(total_loans_taken)?;
        let outflow = total_expenses
            .checked_add(total_loans_given)?
            .checked_add(total_savings)?;
        let available_balance = inflow.checked_sub(outflow)?;

        Some(Self {
            total_income,
            total_expenses,
            total_loans_given,
            total_loans_taken,
            total_savings,
            available_balance,
        })
    }

    /// Total money that came in (income and loans taken).
    #[must_use]
    pub fn total_inflow(&self) -> Decimal {
        self.total_income.saturating_add(self.total_loans_taken)
    }

    /// Total money that went out (expenses, loans given, savings).
    #[must_use]
    pub fn total_outflow(&self) -> Decimal {
        self.total_expenses
            .saturating_add(self.total_loans_given)
            .saturating_add(self.total_savings)
    }
}

/// Kind of a proposed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// New income.
    Income,
    /// New expense.
    Expense,
    /// New saving.
    Saving,
    /// Money lent out.
    LoanGiven,
    /// Money borrowed.
    LoanTaken,
}

impl TransactionKind {
    /// Whether a transaction of this kind can overdraw the available balance.
    ///
    /// Income and loans taken only ever add funds.
    #[must_use]
    pub const fn requires_balance_check(self) -> bool {
        matches!(self, Self::Expense | Self::Saving | Self::LoanGiven)
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
            Self::Saving => write!(f, "saving"),
            Self::LoanGiven => write!(f, "loan_given"),
            Self::LoanTaken => write!(f, "loan_taken"),
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "saving" => Ok(Self::Saving),
            "loan_given" => Ok(Self::LoanGiven),
            "loan_taken" => Ok(Self::LoanTaken),
            _ => Err(format!("Unknown transaction kind: {s}")),
        }
    }
}

/// Outcome of checking a proposed transaction against the balance.
///
/// An invalid result is an expected, user-facing outcome rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the transaction may be submitted.
    pub is_valid: bool,
    /// Explanation shown to the user; empty when valid.
    pub message: String,
    /// Adjusted balance the transaction was checked against.
    pub available_balance: Decimal,
    /// Balance after applying the transaction.
    pub new_balance: Decimal,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub fn valid(available_balance: Decimal, new_balance: Decimal) -> Self {
        Self {
            is_valid: true,
            message: String::new(),
            available_balance,
            new_balance,
        }
    }

    /// A failing result carrying a user-facing message.
    #[must_use]
    pub fn invalid(available_balance: Decimal, new_balance: Decimal, message: String) -> Self {
        Self {
            is_valid: false,
            message,
            available_balance,
            new_balance,
        }
    }
}
