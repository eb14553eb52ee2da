//! Spending analysis
//!
//! Loads the stored expense record, computes the category breakdown, and,
//! when income is also available, the savings potential for the month.

use crate::error::BudgetResult;
use crate::models::{Category, ExpenseRecord, Money};
use crate::storage::BudgetStore;

/// Computed spending breakdown for the current month
#[derive(Debug, Clone)]
pub struct SpendingAnalysis {
    /// The stored expense record
    pub record: ExpenseRecord,
    /// Sum of all category amounts
    pub total_expenses: Money,
    /// Proportional share per nonzero category; empty when the total is zero
    pub shares: Vec<(Category, f64)>,
    /// Stored income, if it has been saved
    pub income: Option<Money>,
    /// `income - total_expenses`; present only when income is stored.
    /// May be negative.
    pub savings_potential: Option<Money>,
}

impl SpendingAnalysis {
    /// Generate the analysis from the store.
    ///
    /// Returns `Ok(None)` when no expense record has been saved yet, which
    /// callers surface as a warning rather than an error. Missing income is
    /// the softer case: the breakdown is still produced, with the savings
    /// figures absent.
    pub fn generate(store: &dyn BudgetStore) -> BudgetResult<Option<Self>> {
        let record = match store.load_expenses()? {
            Some(record) => record,
            None => return Ok(None),
        };

        let total_expenses = record.total();
        let shares = record.shares();

        let income = store.load_income()?;
        let savings_potential = income.map(|income| income - total_expenses);

        Ok(Some(Self {
            record,
            total_expenses,
            shares,
            income,
            savings_potential,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn sample_record() -> ExpenseRecord {
        let mut record = ExpenseRecord::new();
        record.set(Category::Rent, Money::from_cents(100000));
        record.set(Category::Utilities, Money::from_cents(20000));
        record.set(Category::Groceries, Money::from_cents(30000));
        record.set(Category::Transportation, Money::from_cents(10000));
        record.set(Category::Entertainment, Money::from_cents(5000));
        record.set(Category::Others, Money::from_cents(5000));
        record
    }

    #[test]
    fn test_no_expenses_yields_none() {
        let store = MemoryStore::new();
        assert!(SpendingAnalysis::generate(&store).unwrap().is_none());
    }

    #[test]
    fn test_expenses_without_income() {
        let store = MemoryStore::new();
        store.save_expenses(&sample_record()).unwrap();

        let analysis = SpendingAnalysis::generate(&store).unwrap().unwrap();
        assert_eq!(analysis.total_expenses.cents(), 170000);
        assert!(!analysis.shares.is_empty());
        assert!(analysis.income.is_none());
        assert!(analysis.savings_potential.is_none());
    }

    #[test]
    fn test_savings_potential() {
        let store = MemoryStore::new();
        store.save_expenses(&sample_record()).unwrap();
        store.save_income(Money::from_cents(300000)).unwrap();

        let analysis = SpendingAnalysis::generate(&store).unwrap().unwrap();
        assert_eq!(analysis.total_expenses.cents(), 170000);
        assert_eq!(analysis.savings_potential.unwrap().cents(), 130000);
    }

    #[test]
    fn test_savings_potential_can_be_negative() {
        let store = MemoryStore::new();
        store.save_expenses(&sample_record()).unwrap();
        store.save_income(Money::from_cents(100000)).unwrap();

        let analysis = SpendingAnalysis::generate(&store).unwrap().unwrap();
        assert_eq!(analysis.savings_potential.unwrap().cents(), -70000);
    }

    #[test]
    fn test_all_zero_record_has_no_shares() {
        let store = MemoryStore::new();
        store.save_expenses(&ExpenseRecord::new()).unwrap();

        let analysis = SpendingAnalysis::generate(&store).unwrap().unwrap();
        assert!(analysis.total_expenses.is_zero());
        assert!(analysis.shares.is_empty());
    }

    #[test]
    fn test_shares_sum_to_one() {
        let store = MemoryStore::new();
        store.save_expenses(&sample_record()).unwrap();

        let analysis = SpendingAnalysis::generate(&store).unwrap().unwrap();
        let sum: f64 = analysis.shares.iter().map(|(_, s)| s).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
