//! Property-based tests for the balance service.

use chrono::NaiveDate;
use fintrack_shared::types::RecordId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::BalanceService;
use super::types::TransactionKind;
use crate::records::{ExpenseRecord, IncomeRecord, LoanRecord, LoanType, SavingRecord};
use crate::snapshot::Snapshot;

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..730).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + chrono::Days::new(offset)
    })
}

fn income_strategy() -> impl Strategy<Value = IncomeRecord> {
    (amount_strategy(), date_strategy()).prop_map(|(amount, date)| IncomeRecord {
        id: RecordId::new(),
        amount,
        date,
    })
}

fn expense_strategy() -> impl Strategy<Value = ExpenseRecord> {
    (amount_strategy(), date_strategy()).prop_map(|(amount, date)| ExpenseRecord {
        id: RecordId::new(),
        amount,
        date,
    })
}

fn saving_strategy() -> impl Strategy<Value = SavingRecord> {
    (amount_strategy(), date_strategy()).prop_map(|(amount, date)| SavingRecord {
        id: RecordId::new(),
        amount,
        date,
    })
}

fn loan_strategy() -> impl Strategy<Value = LoanRecord> {
    (amount_strategy(), date_strategy(), any::<bool>()).prop_map(|(amount, date, given)| {
        LoanRecord {
            id: RecordId::new(),
            amount,
            date,
            loan_type: if given { LoanType::Given } else { LoanType::Taken },
        }
    })
}

fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    (
        prop::collection::vec(income_strategy(), 0..10),
        prop::collection::vec(expense_strategy(), 0..10),
        prop::collection::vec(saving_strategy(), 0..10),
        prop::collection::vec(loan_strategy(), 0..10),
    )
        .prop_map(|(income, expenses, savings, loans)| {
            Snapshot::loaded(income, expenses, savings, loans)
        })
}

fn outflow_kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::Expense),
        Just(TransactionKind::Saving),
        Just(TransactionKind::LoanGiven),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Available balance always equals the signed sum of the five totals.
    #[test]
    fn prop_available_balance_identity(snapshot in snapshot_strategy()) {
        let s = BalanceService::summarize(&snapshot);
        prop_assert_eq!(
            s.available_balance,
            s.total_income + s.total_loans_taken - s.total_expenses - s.total_loans_given - s.total_savings
        );
    }

    /// Summing twice over the same snapshot gives the same result.
    #[test]
    fn prop_summary_is_deterministic(snapshot in snapshot_strategy()) {
        prop_assert_eq!(BalanceService::summarize(&snapshot), BalanceService::summarize(&snapshot));
    }

    /// In-range snapshots pass the check and the saturating summary is exact.
    #[test]
    fn prop_in_range_summary_is_exact(snapshot in snapshot_strategy()) {
        prop_assert!(snapshot.check().is_ok());
        prop_assert_eq!(
            BalanceService::checked_summarize(&snapshot),
            Some(BalanceService::summarize(&snapshot))
        );
    }

    /// Excluding an expense equals summarizing without it.
    #[test]
    fn prop_exclusion_equals_removal(
        snapshot in snapshot_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let expenses = snapshot.expenses.items().to_vec();
        prop_assume!(!expenses.is_empty());
        let idx = pick.index(expenses.len());
        let target = expenses[idx].id;

        let mut without = snapshot.clone();
        let mut remaining = expenses;
        remaining.remove(idx);
        without.expenses = remaining.into();

        prop_assert_eq!(
            BalanceService::compute_summary_excluding(&snapshot, TransactionKind::Expense, target),
            BalanceService::summarize(&without)
        );
    }

    /// An outflow is accepted exactly when it fits in the available balance.
    #[test]
    fn prop_outflow_valid_iff_within_balance(
        snapshot in snapshot_strategy(),
        amount in amount_strategy(),
        kind in outflow_kind_strategy(),
    ) {
        let available = BalanceService::summarize(&snapshot).available_balance;
        let result = BalanceService::validate_transaction(&snapshot, amount, kind, None);

        prop_assert_eq!(result.is_valid, amount <= available);
        prop_assert_eq!(result.new_balance, available - amount);
        prop_assert_eq!(result.message.is_empty(), result.is_valid);
    }

    /// Income and loans taken pass regardless of magnitude.
    #[test]
    fn prop_inflows_never_rejected(
        snapshot in snapshot_strategy(),
        amount in amount_strategy(),
        taken in any::<bool>(),
    ) {
        let kind = if taken { TransactionKind::LoanTaken } else { TransactionKind::Income };
        prop_assert!(BalanceService::validate_transaction(&snapshot, amount, kind, None).is_valid);
    }

    /// An id that matches nothing never changes the outcome.
    #[test]
    fn prop_unknown_exclude_id_is_noop(
        snapshot in snapshot_strategy(),
        amount in amount_strategy(),
        kind in outflow_kind_strategy(),
    ) {
        prop_assert_eq!(
            BalanceService::validate_transaction(&snapshot, amount, kind, Some(RecordId::new())),
            BalanceService::validate_transaction(&snapshot, amount, kind, None)
        );
    }
}
