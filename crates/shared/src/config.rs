//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Snapshot source configuration.
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Display configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Currency used when rendering amounts.
    #[serde(default)]
    pub currency: Currency,
}

/// Snapshot source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    /// Path of the JSON snapshot exported by the data layer.
    #[serde(default = "default_snapshot_path")]
    pub path: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> String {
    "snapshot.json".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "fintrack=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINTRACK").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "FINTRACK__DISPLAY__CURRENCY",
                "FINTRACK__SNAPSHOT__PATH",
                "FINTRACK__LOGGING__FILTER",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.display.currency, Currency::Usd);
                assert_eq!(config.snapshot.path, "snapshot.json");
                assert_eq!(config.logging.filter, "fintrack=info");
            },
        );
    }

    #[test]
    fn test_invalid_currency_is_config_error() {
        temp_env::with_var("FINTRACK__DISPLAY__CURRENCY", Some("XXX"), || {
            let err = AppConfig::load().unwrap_err();
            assert_eq!(err.error_code(), "CONFIG_ERROR");
            assert_eq!(err.status_code(), 500);
        });
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("FINTRACK__DISPLAY__CURRENCY", Some("EUR")),
                ("FINTRACK__SNAPSHOT__PATH", Some("/tmp/ledger.json")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.display.currency, Currency::Eur);
                assert_eq!(config.snapshot.path, "/tmp/ledger.json");
            },
        );
    }
}
