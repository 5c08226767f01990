//! Environment configuration
//!
//! Everything is optional; the defaults produce a self-contained demo
//! run. `.env` files are honored via dotenv before this is read.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Bank name shown in headers (ZENITH_BANK_NAME)
    pub bank_name: String,
    /// JSON transaction export to load; demo ledger when unset
    /// (ZENITH_TRANSACTIONS)
    pub transactions_path: Option<PathBuf>,
    /// Log file path (ZENITH_LOG)
    pub log_path: PathBuf,
    /// Error carried over from a failed login attempt, shown as an error
    /// toast on startup (ZENITH_LOGIN_ERROR)
    pub login_error: Option<String>,
    /// Seed for the demo ledger (ZENITH_DEMO_SEED)
    pub demo_seed: u64,
    /// Where the chart export key writes its PNG (ZENITH_CHART_EXPORT)
    pub chart_export_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            bank_name: env::var("ZENITH_BANK_NAME").unwrap_or_else(|_| "ZENITH".to_string()),
            transactions_path: env::var("ZENITH_TRANSACTIONS").ok().map(PathBuf::from),
            log_path: env::var("ZENITH_LOG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("zenith-tui.log")),
            login_error: env::var("ZENITH_LOGIN_ERROR").ok().filter(|e| !e.is_empty()),
            demo_seed: env::var("ZENITH_DEMO_SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2024),
            chart_export_path: env::var("ZENITH_CHART_EXPORT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("zenith-chart.png")),
        }
    }
}
