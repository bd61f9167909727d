//! Monthly grouping of a snapshot for charts.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::types::{MonthlyTotals, YearMonth};
use crate::records::{LoanType, Record};
use crate::snapshot::Snapshot;

/// Groups every loaded record by calendar month, oldest first.
///
/// Months with no records are omitted. Loading collections contribute
/// nothing, same as in the balance summary.
#[must_use]
pub fn monthly_breakdown(snapshot: &Snapshot) -> Vec<MonthlyTotals> {
    let mut months: BTreeMap<YearMonth, MonthlyTotals> = BTreeMap::new();

    accumulate(&mut months, snapshot.income.items(), |t| &mut t.income);
    accumulate(&mut months, snapshot.expenses.items(), |t| &mut t.expenses);
    accumulate(&mut months, snapshot.savings.items(), |t| &mut t.savings);

    for loan in snapshot.loans.items() {
        let totals = entry(&mut months, loan.date);
        let slot = match loan.loan_type {
            LoanType::Given => &mut totals.loans_given,
            LoanType::Taken => &mut totals.loans_taken,
        };
        *slot = slot.saturating_add(loan.amount);
    }

    months.into_values().collect()
}

fn accumulate<R: Record>(
    months: &mut BTreeMap<YearMonth, MonthlyTotals>,
    records: &[R],
    field: impl Fn(&mut MonthlyTotals) -> &mut Decimal,
) {
    for record in records {
        let slot = field(entry(months, record.date()));
        *slot = slot.saturating_add(record.amount());
    }
}

fn entry(months: &mut BTreeMap<YearMonth, MonthlyTotals>, date: NaiveDate) -> &mut MonthlyTotals {
    let key = YearMonth {
        year: date.year(),
        month: date.month(),
    };
    months
        .entry(key)
        .or_insert_with(|| MonthlyTotals::empty(key))
}
