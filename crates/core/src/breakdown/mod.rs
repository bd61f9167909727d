//! Per-month totals feeding the dashboard charts.

pub mod service;
pub mod types;

pub use service::monthly_breakdown;
pub use types::{CashFlowChart, MonthlyTotals, YearMonth};
