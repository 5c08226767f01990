//! Transaction models
//!
//! Transactions are supplied externally (a JSON export of the account
//! ledger) and treated as read-only by every dashboard component.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::DashboardError;

/// A single ledger entry. Positive amounts are income, negative are expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    #[serde(default = "default_transaction_type")]
    pub transaction_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_created_at")]
    pub created_at: DateTime<Utc>,
}

fn default_transaction_type() -> String {
    "General".to_string()
}

fn default_created_at() -> DateTime<Utc> {
    Utc::now()
}

/// Load transactions from a JSON file (an array of transaction objects)
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, DashboardError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| DashboardError::DataLoad(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| DashboardError::DataLoad(format!("{}: {}", path.display(), e)))
}

/// Generate a deterministic demo ledger for when no transaction file is
/// configured. Seeded so repeated runs show the same dashboard.
pub fn demo_transactions(seed: u64) -> Vec<Transaction> {
    const ENTRIES: &[(&str, &str, f64, f64)] = &[
        ("Salary", "Transfer", 2400.0, 3600.0),
        ("Freelance invoice", "Transfer", 150.0, 900.0),
        ("Groceries", "General", -220.0, -60.0),
        ("Streaming subscription", "Virtual Card", -18.0, -9.0),
        ("Rent", "Transfer", -1400.0, -950.0),
        ("Dining out", "Virtual Card", -120.0, -35.0),
        ("Utility bill", "General", -140.0, -70.0),
        ("Interest", "General", 4.0, 22.0),
    ];

    let mut rng = StdRng::seed_from_u64(seed);
    let start = Utc
        .with_ymd_and_hms(2024, 1, 8, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let mut transactions = Vec::new();
    for week in 0..3 {
        for (i, (description, kind, lo, hi)) in ENTRIES.iter().enumerate() {
            let amount = (rng.gen_range(*lo..=*hi) * 100.0).round() / 100.0;
            transactions.push(Transaction {
                amount,
                transaction_type: (*kind).to_string(),
                description: (*description).to_string(),
                created_at: start + Duration::days(week * 7 + i as i64),
            });
        }
    }
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transaction_json() {
        let raw = r#"[
            {"amount": 100.0, "transaction_type": "Transfer", "description": "Salary", "created_at": "2024-03-01T09:00:00Z"},
            {"amount": -40.5}
        ]"#;
        let transactions: Vec<Transaction> = serde_json::from_str(raw).expect("parse failed");
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].amount, 100.0);
        assert_eq!(transactions[1].amount, -40.5);
        // omitted fields fall back to defaults
        assert_eq!(transactions[1].transaction_type, "General");
        assert!(transactions[1].description.is_empty());
    }

    #[test]
    fn test_demo_ledger_is_deterministic() {
        let a = demo_transactions(7);
        let b = demo_transactions(7);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.amount, y.amount);
        }
        // the demo ledger always mixes income and expenses
        assert!(a.iter().any(|t| t.amount > 0.0));
        assert!(a.iter().any(|t| t.amount < 0.0));
    }
}
