//! Terminal rendering of the spending analysis

use crate::display::format::{format_bar, format_percentage, separator};
use crate::services::SpendingAnalysis;

const BAR_WIDTH: usize = 30;

/// Format the full analysis for terminal display
pub fn format_terminal(analysis: &SpendingAnalysis) -> String {
    let mut output = String::new();

    output.push_str("Your Monthly Expenses\n");
    output.push_str(&separator(60));
    output.push('\n');

    for (category, amount) in analysis.record.entries() {
        output.push_str(&format!("{:<16} {:>12}\n", category.to_string(), amount.to_string()));
    }

    output.push('\n');

    if analysis.shares.is_empty() {
        output.push_str("All amounts are zero; nothing to chart.\n");
    } else {
        output.push_str("Spending Breakdown\n");
        output.push_str(&separator(60));
        output.push('\n');

        let max_share = analysis
            .shares
            .iter()
            .map(|(_, s)| *s)
            .fold(0.0_f64, f64::max);

        for (category, share) in &analysis.shares {
            output.push_str(&format!(
                "{:<16} {} {:>6}\n",
                category.to_string(),
                format_bar(*share, max_share, BAR_WIDTH),
                format_percentage(share * 100.0)
            ));
        }
    }

    if let (Some(income), Some(savings)) = (analysis.income, analysis.savings_potential) {
        output.push('\n');
        output.push_str(&format!("Monthly income:           {}\n", income));
        output.push_str(&format!(
            "Your total expenses:      {}\n",
            analysis.total_expenses
        ));
        output.push_str(&format!("Monthly savings potential: {}\n", savings));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseRecord, Money};
    use crate::storage::{BudgetStore, MemoryStore};

    fn analysis_with_income() -> SpendingAnalysis {
        let store = MemoryStore::new();
        let mut record = ExpenseRecord::new();
        record.set(Category::Rent, Money::from_cents(100000));
        record.set(Category::Groceries, Money::from_cents(70000));
        store.save_expenses(&record).unwrap();
        store.save_income(Money::from_cents(300000)).unwrap();
        SpendingAnalysis::generate(&store).unwrap().unwrap()
    }

    #[test]
    fn test_format_includes_totals() {
        let output = format_terminal(&analysis_with_income());
        assert!(output.contains("$1700.00"));
        assert!(output.contains("$1300.00"));
    }

    #[test]
    fn test_format_without_income_omits_savings() {
        let store = MemoryStore::new();
        let mut record = ExpenseRecord::new();
        record.set(Category::Rent, Money::from_cents(100000));
        store.save_expenses(&record).unwrap();

        let analysis = SpendingAnalysis::generate(&store).unwrap().unwrap();
        let output = format_terminal(&analysis);
        assert!(!output.contains("savings potential"));
    }

    #[test]
    fn test_format_zero_total_mentions_empty_chart() {
        let store = MemoryStore::new();
        store.save_expenses(&ExpenseRecord::new()).unwrap();

        let analysis = SpendingAnalysis::generate(&store).unwrap().unwrap();
        let output = format_terminal(&analysis);
        assert!(output.contains("nothing to chart"));
    }
}
