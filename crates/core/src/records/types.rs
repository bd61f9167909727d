//! Record types fetched from the data layer.

use chrono::NaiveDate;
use fintrack_shared::types::RecordId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// Common view over the four record kinds.
pub trait Record {
    /// The record's identifier.
    fn id(&self) -> RecordId;
    /// The non-negative amount.
    fn amount(&self) -> Decimal;
    /// The date the money moved.
    fn date(&self) -> NaiveDate;
}

fn ensure_non_negative(id: RecordId, amount: Decimal) -> Result<(), RecordError> {
    if amount < Decimal::ZERO {
        return Err(RecordError::NegativeAmount { id, amount });
    }
    Ok(())
}

macro_rules! simple_record {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            /// Record ID.
            pub id: RecordId,
            /// Amount, never negative.
            pub amount: Decimal,
            /// Transaction date.
            pub date: NaiveDate,
        }

        impl $name {
            /// Creates a record, rejecting negative amounts.
            ///
            /// # Errors
            ///
            /// Returns `RecordError::NegativeAmount` if `amount < 0`.
            pub fn new(id: RecordId, amount: Decimal, date: NaiveDate) -> Result<Self, RecordError> {
                ensure_non_negative(id, amount)?;
                Ok(Self { id, amount, date })
            }
        }

        impl Record for $name {
            fn id(&self) -> RecordId {
                self.id
            }

            fn amount(&self) -> Decimal {
                self.amount
            }

            fn date(&self) -> NaiveDate {
                self.date
            }
        }
    };
}

simple_record!(IncomeRecord, "Money received. Increases the available balance.");
simple_record!(ExpenseRecord, "Money spent. Decreases the available balance.");
simple_record!(
    SavingRecord,
    "Money set aside. Treated as spent from the available balance."
);

/// Direction of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    /// Money lent to someone else (outflow).
    Given,
    /// Money borrowed (inflow).
    Taken,
}

impl std::fmt::Display for LoanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Given => write!(f, "given"),
            Self::Taken => write!(f, "taken"),
        }
    }
}

/// A loan given or taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    /// Record ID.
    pub id: RecordId,
    /// Amount, never negative.
    pub amount: Decimal,
    /// Transaction date.
    pub date: NaiveDate,
    /// Whether the loan was given or taken.
    pub loan_type: LoanType,
}

impl LoanRecord {
    /// Creates a loan record, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NegativeAmount` if `amount < 0`.
    pub fn new(
        id: RecordId,
        amount: Decimal,
        date: NaiveDate,
        loan_type: LoanType,
    ) -> Result<Self, RecordError> {
        ensure_non_negative(id, amount)?;
        Ok(Self {
            id,
            amount,
            date,
            loan_type,
        })
    }
}

impl Record for LoanRecord {
    fn id(&self) -> RecordId {
        self.id
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_new_accepts_zero_and_positive() {
        assert!(IncomeRecord::new(RecordId::new(), dec!(0), day()).is_ok());
        assert!(ExpenseRecord::new(RecordId::new(), dec!(12.50), day()).is_ok());
        assert!(SavingRecord::new(RecordId::new(), dec!(1), day()).is_ok());
    }

    #[test]
    fn test_new_rejects_negative_amount() {
        let id = RecordId::new();
        let err = ExpenseRecord::new(id, dec!(-1), day()).unwrap_err();
        assert!(matches!(
            err,
            RecordError::NegativeAmount { id: got, amount } if got == id && amount == dec!(-1)
        ));
    }

    #[test]
    fn test_loan_rejects_negative_amount() {
        let result = LoanRecord::new(RecordId::new(), dec!(-0.01), day(), LoanType::Taken);
        assert!(result.is_err());
    }

    #[test]
    fn test_loan_type_serde() {
        assert_eq!(serde_json::to_string(&LoanType::Given).unwrap(), "\"given\"");
        let taken: LoanType = serde_json::from_str("\"taken\"").unwrap();
        assert_eq!(taken, LoanType::Taken);
    }
}
