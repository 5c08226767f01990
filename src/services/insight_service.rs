//! Derived insight lines
//!
//! Pure aggregation over the transaction list producing the ordered
//! insight sentences shown on the dashboard. No side effects; the screen
//! renders whatever comes back.

use crate::models::Transaction;

/// Generate the insight lines, in fixed order: total income, total
/// expenses, the saved-or-overspent line, and an overspend warning when
/// expenses exceed 70% of income.
pub fn generate(transactions: &[Transaction]) -> Vec<String> {
    let mut total_income = 0.0;
    let mut total_expense = 0.0;
    for tx in transactions {
        if tx.amount > 0.0 {
            total_income += tx.amount;
        } else {
            total_expense += tx.amount.abs();
        }
    }
    let saving = total_income - total_expense;

    let mut insights = Vec::with_capacity(4);
    insights.push(format!("Total Income: ${}", total_income));
    insights.push(format!("Total Expenses: ${}", total_expense));

    if saving > 0.0 {
        insights.push(format!("✅ You saved ${} this period.", saving));
    } else {
        insights.push(format!("⚠ You overspent by ${}.", saving.abs()));
    }

    if total_expense > total_income * 0.7 {
        insights.push("⚠ Spending is higher than recommended.".to_string());
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(amount: f64) -> Transaction {
        Transaction {
            amount,
            transaction_type: "General".to_string(),
            description: String::new(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_empty_ledger_reports_zero_overspend() {
        let insights = generate(&[]);
        assert_eq!(
            insights,
            vec![
                "Total Income: $0".to_string(),
                "Total Expenses: $0".to_string(),
                "⚠ You overspent by $0.".to_string(),
            ]
        );
    }

    #[test]
    fn test_positive_saving_without_warning() {
        let insights = generate(&[tx(100.0), tx(-40.0)]);
        assert_eq!(
            insights,
            vec![
                "Total Income: $100".to_string(),
                "Total Expenses: $40".to_string(),
                "✅ You saved $60 this period.".to_string(),
            ]
        );
    }

    #[test]
    fn test_overspend_with_warning() {
        let insights = generate(&[tx(50.0), tx(-80.0)]);
        assert_eq!(
            insights,
            vec![
                "Total Income: $50".to_string(),
                "Total Expenses: $80".to_string(),
                "⚠ You overspent by $30.".to_string(),
                "⚠ Spending is higher than recommended.".to_string(),
            ]
        );
    }

    #[test]
    fn test_fractional_amounts_render_plainly() {
        let insights = generate(&[tx(100.5), tx(-40.25)]);
        assert_eq!(insights[0], "Total Income: $100.5");
        assert_eq!(insights[1], "Total Expenses: $40.25");
    }
}
