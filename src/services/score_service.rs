//! Credit score computation
//!
//! The demo score is derived from activity counts only: each income entry
//! adds ten points over the 600 baseline, each expense entry removes ten.
//! This is presentation logic, not a real scoring model.

use crate::models::{CreditScore, ScoreBand, Transaction};

const BASELINE: i64 = 600;
const POINTS_PER_ENTRY: i64 = 10;
const SCORE_FLOOR: i64 = 300;
const SCORE_CEILING: i64 = 850;

/// Compute the clamped demo score and its band
pub fn compute(transactions: &[Transaction]) -> CreditScore {
    let income_entries = transactions.iter().filter(|t| t.amount > 0.0).count() as i64;
    let expense_entries = transactions.iter().filter(|t| t.amount < 0.0).count() as i64;

    let raw = BASELINE + (income_entries - expense_entries) * POINTS_PER_ENTRY;
    let value = raw.clamp(SCORE_FLOOR, SCORE_CEILING);

    CreditScore {
        value,
        band: ScoreBand::from_score(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(income_entries: usize, expense_entries: usize) -> Vec<Transaction> {
        let mut transactions = Vec::new();
        for _ in 0..income_entries {
            transactions.push(tx(10.0));
        }
        for _ in 0..expense_entries {
            transactions.push(tx(-10.0));
        }
        transactions
    }

    fn tx(amount: f64) -> Transaction {
        Transaction {
            amount,
            transaction_type: "General".to_string(),
            description: String::new(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_baseline_score_for_empty_ledger() {
        let score = compute(&[]);
        assert_eq!(score.value, 600);
        assert_eq!(score.band, ScoreBand::Fair);
    }

    #[test]
    fn test_score_moves_with_entry_counts() {
        assert_eq!(compute(&ledger(5, 2)).value, 630);
        assert_eq!(compute(&ledger(2, 5)).value, 570);
    }

    #[test]
    fn test_score_clamps_to_bounds() {
        // extreme deltas in either direction stay inside [300, 850]
        assert_eq!(compute(&ledger(100, 0)).value, 850);
        assert_eq!(compute(&ledger(0, 100)).value, 300);
    }

    #[test]
    fn test_bands() {
        assert_eq!(ScoreBand::from_score(300), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(499), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(500), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(699), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(700), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(850), ScoreBand::Excellent);
    }
}
