//! Drives the engine the way the entry form does: records arrive from the
//! data layer, the amount field is re-validated as the user types, and the
//! result is checked once more before submission.

use chrono::NaiveDate;
use fintrack_core::records::{ExpenseRecord, IncomeRecord, LoanRecord, LoanType, SavingRecord};
use fintrack_core::{
    BalanceEngine, Collection, CollectionObserver, CollectionUpdate, TransactionKind,
};
use fintrack_shared::types::RecordId;
use rust_decimal_macros::dec;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

#[test]
fn test_add_then_edit_expense() {
    let mut engine = BalanceEngine::new();
    engine.on_update(CollectionUpdate::Income(
        vec![IncomeRecord::new(RecordId::new(), dec!(100), day(1)).unwrap()].into(),
    ));
    engine.on_update(CollectionUpdate::Savings(
        vec![SavingRecord::new(RecordId::new(), dec!(20), day(2)).unwrap()].into(),
    ));
    engine.on_update(CollectionUpdate::Loans(
        vec![LoanRecord::new(RecordId::new(), dec!(10), day(3), LoanType::Given).unwrap()].into(),
    ));
    engine.on_update(CollectionUpdate::Expenses(Collection::Loaded(vec![])));
    assert_eq!(engine.available_balance(), dec!(70));

    // Typing "7", "70", "700" into the amount field.
    assert!(engine.validate(dec!(7), TransactionKind::Expense, None).is_valid);
    assert!(engine.validate(dec!(70), TransactionKind::Expense, None).is_valid);
    let rejected = engine.validate(dec!(700), TransactionKind::Expense, None);
    assert!(!rejected.is_valid);
    assert!(rejected.message.contains("Available: 70.00"));
    assert!(rejected.message.contains("Required: 700.00"));

    // Submit 30 and let the data layer echo the new collection back.
    assert!(engine.validate(dec!(30), TransactionKind::Expense, None).is_valid);
    let groceries = ExpenseRecord::new(RecordId::new(), dec!(30), day(4)).unwrap();
    let groceries_id = groceries.id;
    engine.on_update(CollectionUpdate::Expenses(vec![groceries].into()));
    assert_eq!(engine.available_balance(), dec!(40));

    // Editing the same expense: its 30 is available again.
    let edit = engine.validate(dec!(70), TransactionKind::Expense, Some(groceries_id));
    assert!(edit.is_valid);
    assert_eq!(edit.available_balance, dec!(70));
    assert_eq!(edit.new_balance, dec!(0));

    let edit = engine.validate(dec!(70.01), TransactionKind::Expense, Some(groceries_id));
    assert!(!edit.is_valid);
}

#[test]
fn test_income_and_borrowing_never_blocked_on_empty_account() {
    let engine = BalanceEngine::new();
    assert!(engine.validate(dec!(5000), TransactionKind::Income, None).is_valid);
    assert!(engine.validate(dec!(5000), TransactionKind::LoanTaken, None).is_valid);
    assert!(!engine.validate(dec!(0.01), TransactionKind::LoanGiven, None).is_valid);
    assert!(engine.validate(dec!(0), TransactionKind::Saving, None).is_valid);
}
