//! Balance service for summary computation and transaction validation.
//!
//! Everything here is a pure function of the snapshot passed in. The check
//! is advisory: it holds no lock and knows nothing about writes made from
//! other sessions.

use fintrack_shared::types::{RecordId, format_amount};
use rust_decimal::Decimal;

use super::types::{FinancialSummary, TransactionKind, ValidationResult};
use crate::records::{ExpenseRecord, IncomeRecord, LoanRecord, LoanType, Record, SavingRecord};
use crate::snapshot::{Collection, Snapshot};

/// Balance service for business logic.
pub struct BalanceService;

impl BalanceService {
    /// Aggregate the four collections into a summary.
    ///
    /// Collections that are still loading contribute zero. Totals saturate
    /// at the `Decimal` bounds; snapshots that passed [`Snapshot::check`]
    /// never reach them.
    #[must_use]
    pub fn compute_summary(
        income: &Collection<IncomeRecord>,
        expenses: &Collection<ExpenseRecord>,
        savings: &Collection<SavingRecord>,
        loans: &Collection<LoanRecord>,
    ) -> FinancialSummary {
        let (loans_given, loans_taken) =
            loans
                .items()
                .iter()
                .fold((Decimal::ZERO, Decimal::ZERO), |(given, taken), loan| {
                    match loan.loan_type {
                        LoanType::Given => (given.saturating_add(loan.amount), taken),
                        LoanType::Taken => (given, taken.saturating_add(loan.amount)),
                    }
                });

        FinancialSummary::from_totals(
            total(income.items()),
            total(expenses.items()),
            loans_given,
            loans_taken,
            total(savings.items()),
        )
    }

    /// Aggregate a whole snapshot.
    #[must_use]
    pub fn summarize(snapshot: &Snapshot) -> FinancialSummary {
        Self::compute_summary(
            &snapshot.income,
            &snapshot.expenses,
            &snapshot.savings,
            &snapshot.loans,
        )
    }

    /// Aggregate a snapshot with exact arithmetic.
    ///
    /// Returns `None` if any total, the inflow, the outflow, or the
    /// available balance does not fit in a `Decimal`.
    #[must_use]
    pub fn checked_summarize(snapshot: &Snapshot) -> Option<FinancialSummary> {
        let mut loans_given = Decimal::ZERO;
        let mut loans_taken = Decimal::ZERO;
        for loan in snapshot.loans.items() {
            match loan.loan_type {
                LoanType::Given => loans_given = loans_given.checked_add(loan.amount)?,
                LoanType::Taken => loans_taken = loans_taken.checked_add(loan.amount)?,
            }
        }

        FinancialSummary::checked_from_totals(
            checked_total(snapshot.income.items())?,
            checked_total(snapshot.expenses.items())?,
            loans_given,
            loans_taken,
            checked_total(snapshot.savings.items())?,
        )
    }

    /// Aggregate a snapshot as if one existing record did not exist.
    ///
    /// Looks up `id` in the collection matching `kind` (loans also match on
    /// direction). Only the first match is removed. An unknown id leaves the
    /// summary unchanged.
    #[must_use]
    pub fn compute_summary_excluding(
        snapshot: &Snapshot,
        kind: TransactionKind,
        id: RecordId,
    ) -> FinancialSummary {
        let summary = Self::summarize(snapshot);

        let Some(amount) = Self::find_amount(snapshot, kind, id) else {
            tracing::debug!(%id, %kind, "Excluded record not found, no adjustment");
            return summary;
        };

        tracing::debug!(%id, %kind, %amount, "Excluding record from balance");

        let mut income = summary.total_income;
        let mut expenses = summary.total_expenses;
        let mut loans_given = summary.total_loans_given;
        let mut loans_taken = summary.total_loans_taken;
        let mut savings = summary.total_savings;

        let reversed = match kind {
            TransactionKind::Income => &mut income,
            TransactionKind::Expense => &mut expenses,
            TransactionKind::Saving => &mut savings,
            TransactionKind::LoanGiven => &mut loans_given,
            TransactionKind::LoanTaken => &mut loans_taken,
        };
        *reversed = reversed.saturating_sub(amount);

        FinancialSummary::from_totals(income, expenses, loans_given, loans_taken, savings)
    }

    /// Check a proposed transaction against the available balance.
    ///
    /// 1. Baseline is the available balance, with `exclude_id` removed when
    ///    an existing record is being edited
    /// 2. The new balance is the baseline minus `amount`
    /// 3. A negative new balance rejects the transaction
    ///
    /// Income and loans taken are never rejected. The new balance saturates
    /// at the `Decimal` bounds, so an outflow past `Decimal::MIN` is rejected
    /// and an inflow past `Decimal::MAX` reports `Decimal::MAX`.
    #[must_use]
    pub fn validate_transaction(
        snapshot: &Snapshot,
        amount: Decimal,
        kind: TransactionKind,
        exclude_id: Option<RecordId>,
    ) -> ValidationResult {
        let baseline = match exclude_id {
            Some(id) => Self::compute_summary_excluding(snapshot, kind, id),
            None => Self::summarize(snapshot),
        };
        let adjusted = baseline.available_balance;

        if !kind.requires_balance_check() {
            return ValidationResult::valid(adjusted, adjusted.saturating_add(amount));
        }

        let new_balance = adjusted.saturating_sub(amount);
        if new_balance < Decimal::ZERO {
            tracing::info!(
                %kind,
                available = %adjusted,
                required = %amount,
                "Transaction rejected: insufficient balance"
            );
            return ValidationResult::invalid(
                adjusted,
                new_balance,
                insufficient_balance_message(adjusted, amount),
            );
        }

        ValidationResult::valid(adjusted, new_balance)
    }

    fn find_amount(snapshot: &Snapshot, kind: TransactionKind, id: RecordId) -> Option<Decimal> {
        match kind {
            TransactionKind::Income => find_by_id(snapshot.income.items(), id),
            TransactionKind::Expense => find_by_id(snapshot.expenses.items(), id),
            TransactionKind::Saving => find_by_id(snapshot.savings.items(), id),
            TransactionKind::LoanGiven => find_loan(snapshot.loans.items(), id, LoanType::Given),
            TransactionKind::LoanTaken => find_loan(snapshot.loans.items(), id, LoanType::Taken),
        }
    }
}

fn total<R: Record>(records: &[R]) -> Decimal {
    records
        .iter()
        .map(Record::amount)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

fn checked_total<R: Record>(records: &[R]) -> Option<Decimal> {
    records
        .iter()
        .map(Record::amount)
        .try_fold(Decimal::ZERO, Decimal::checked_add)
}

fn find_by_id<R: Record>(records: &[R], id: RecordId) -> Option<Decimal> {
    records.iter().find(|r| r.id() == id).map(Record::amount)
}

fn find_loan(loans: &[LoanRecord], id: RecordId, loan_type: LoanType) -> Option<Decimal> {
    loans
        .iter()
        .find(|l| l.id == id && l.loan_type == loan_type)
        .map(|l| l.amount)
}

fn insufficient_balance_message(available: Decimal, required: Decimal) -> String {
    format!(
        "Insufficient balance. Available: {}, Required: {}. Please add income or reduce the amount.",
        format_amount(available),
        format_amount(required),
    )
}
