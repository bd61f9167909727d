//! Snapshot loading from the data layer's JSON export.

use std::path::Path;

use fintrack_core::Snapshot;
use fintrack_shared::{AppError, AppResult};

/// Reads and checks a snapshot file.
pub fn load_snapshot(path: &Path) -> AppResult<Snapshot> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::NotFound(format!("{}", path.display())),
        _ => AppError::Snapshot(format!("{}: {e}", path.display())),
    })?;

    let snapshot = parse_snapshot(&raw)?;
    tracing::debug!(
        path = %path.display(),
        income = snapshot.income.items().len(),
        expenses = snapshot.expenses.items().len(),
        savings = snapshot.savings.items().len(),
        loans = snapshot.loans.items().len(),
        "Snapshot loaded"
    );
    Ok(snapshot)
}

/// Decodes a snapshot and enforces the non-negative amount invariant.
pub fn parse_snapshot(raw: &str) -> AppResult<Snapshot> {
    let snapshot: Snapshot =
        serde_json::from_str(raw).map_err(|e| AppError::Snapshot(e.to_string()))?;
    snapshot.check()?;
    Ok(snapshot)
}
