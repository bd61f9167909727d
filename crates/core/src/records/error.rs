//! Record error types.

use fintrack_shared::AppError;
use fintrack_shared::types::RecordId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Record-related errors.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Amount cannot be negative.
    #[error("Record {id} has a negative amount: {amount}")]
    NegativeAmount {
        /// Offending record.
        id: RecordId,
        /// The negative amount.
        amount: Decimal,
    },

    /// Totals do not fit in the supported amount range.
    #[error("Record totals exceed the supported amount range")]
    TotalOutOfRange,
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        Self::Validation(err.to_string())
    }
}
