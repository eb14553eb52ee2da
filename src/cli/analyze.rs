//! Spending analysis CLI command

use crate::display;
use crate::error::BudgetResult;
use crate::services::SpendingAnalysis;
use crate::storage::BudgetStore;

/// Handle the analyze command.
///
/// Missing expense data produces a single warning and nothing else; missing
/// income produces the breakdown followed by an income warning. Neither is
/// an error.
pub fn handle_analyze(store: &dyn BudgetStore) -> BudgetResult<()> {
    let analysis = match SpendingAnalysis::generate(store)? {
        Some(analysis) => analysis,
        None => {
            println!("{}", super::NO_EXPENSES_WARNING);
            return Ok(());
        }
    };

    print!("{}", display::analysis::format_terminal(&analysis));

    if analysis.income.is_none() {
        println!("{}", super::NO_INCOME_WARNING);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseRecord, Money};
    use crate::storage::MemoryStore;

    #[test]
    fn test_analyze_with_no_data_is_ok() {
        let store = MemoryStore::new();
        assert!(handle_analyze(&store).is_ok());
    }

    #[test]
    fn test_analyze_with_expenses_only_is_ok() {
        let store = MemoryStore::new();
        let mut record = ExpenseRecord::new();
        record.set(Category::Rent, Money::from_cents(100000));
        store.save_expenses(&record).unwrap();

        assert!(handle_analyze(&store).is_ok());
    }

    #[test]
    fn test_analyze_with_zero_record_is_ok() {
        let store = MemoryStore::new();
        store.save_expenses(&ExpenseRecord::new()).unwrap();
        store.save_income(Money::from_cents(300000)).unwrap();

        assert!(handle_analyze(&store).is_ok());
    }
}
