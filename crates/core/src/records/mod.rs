//! Income, expense, saving, and loan records.

pub mod error;
pub mod types;

pub use error::RecordError;
pub use types::{ExpenseRecord, IncomeRecord, LoanRecord, LoanType, Record, SavingRecord};
