//! Fintrack CLI
//!
//! Loads a snapshot exported by the data layer and prints the balance
//! summary, validates a proposed transaction, or lists monthly totals.

mod source;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fintrack_core::breakdown::{CashFlowChart, monthly_breakdown};
use fintrack_core::{BalanceEngine, FinancialSummary, TransactionKind};
use fintrack_shared::types::{Currency, Money, RecordId};
use fintrack_shared::{AppConfig, AppError, AppResult};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code for boundary errors (unreadable snapshot, bad data).
const ERROR_EXIT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "fintrack")]
#[command(about = "Balance summary and transaction checks for a Fintrack snapshot")]
struct Cli {
    /// Snapshot file (defaults to `snapshot.path` from configuration).
    #[arg(long, short)]
    snapshot: Option<PathBuf>,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show income, expense, saving, and loan totals with the available balance.
    Summary,
    /// Check whether a new or edited transaction fits the available balance.
    Validate {
        /// Proposed amount.
        #[arg(long)]
        amount: Decimal,
        /// income, expense, saving, loan_given, or loan_taken.
        #[arg(long)]
        kind: TransactionKind,
        /// Id of the record being edited, if any.
        #[arg(long)]
        exclude_id: Option<RecordId>,
    },
    /// Show per-month inflow and outflow.
    Monthly,
}

fn main() -> anyhow::Result<ExitCode> {
    let config = AppConfig::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli, &config) {
        Ok(code) => Ok(code),
        Err(err) => {
            tracing::error!(
                code = err.error_code(),
                status = err.status_code(),
                "{err}"
            );
            if cli.json {
                println!("{}", error_body(&err));
            } else {
                eprintln!("error: {err}");
            }
            Ok(ExitCode::from(ERROR_EXIT))
        }
    }
}

fn run(cli: &Cli, config: &AppConfig) -> AppResult<ExitCode> {
    let path = cli
        .snapshot
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.snapshot.path));

    let snapshot = source::load_snapshot(&path)?;
    if snapshot.is_loading() {
        info!("Some collections are still loading; they count as empty");
    }
    let engine = BalanceEngine::with_snapshot(snapshot);
    let currency = config.display.currency;

    match &cli.command {
        Command::Summary => {
            let summary = engine.summary();
            if cli.json {
                println!("{}", to_json(&summary)?);
            } else {
                for (label, amount) in summary_rows(&summary) {
                    println!("{label:<12} {:>16}", Money::new(amount, currency));
                }
            }
        }
        Command::Validate {
            amount,
            kind,
            exclude_id,
        } => {
            let result = engine.validate(*amount, *kind, *exclude_id);
            if cli.json {
                println!("{}", to_json(&result)?);
            } else if result.is_valid {
                println!(
                    "OK: {kind} of {} leaves {}",
                    Money::new(*amount, currency),
                    Money::new(result.new_balance, currency)
                );
            } else {
                println!("{}", result.message);
            }
            if !result.is_valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Monthly => {
            let months = monthly_breakdown(engine.snapshot());
            if cli.json {
                let chart = CashFlowChart::from(months.as_slice());
                println!("{}", to_json(&chart)?);
            } else {
                for month in &months {
                    println!(
                        "{}  in {:>14}  out {:>14}  net {:>14}",
                        month.month,
                        Money::new(month.inflow(), currency),
                        Money::new(month.outflow(), currency),
                        Money::new(month.net(), currency),
                    );
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))
}

/// JSON error object for `--json` callers.
fn error_body(err: &AppError) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": err.error_code(),
            "status": err.status_code(),
            "message": err.to_string(),
        }
    })
}

fn summary_rows(summary: &FinancialSummary) -> [(&'static str, Decimal); 8] {
    [
        ("Income", summary.total_income),
        ("Loans taken", summary.total_loans_taken),
        ("Inflow", summary.total_inflow()),
        ("Expenses", summary.total_expenses),
        ("Savings", summary.total_savings),
        ("Loans given", summary.total_loans_given),
        ("Outflow", summary.total_outflow()),
        ("Available", summary.available_balance),
    ]
}
