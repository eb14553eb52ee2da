//! Savings prediction CLI command

use rand::Rng;

use crate::error::BudgetResult;
use crate::services::predict_savings;
use crate::storage::BudgetStore;

/// Handle the predict command.
///
/// The RNG is injected by the caller; production passes `rand::thread_rng()`
/// so each invocation trains on fresh random data.
pub fn handle_predict<R: Rng>(store: &dyn BudgetStore, rng: &mut R) -> BudgetResult<()> {
    let prediction = match predict_savings(store, rng)? {
        Some(prediction) => prediction,
        None => {
            println!("{}", super::NO_EXPENSES_WARNING);
            return Ok(());
        }
    };

    println!("Current total expenses: {}", prediction.total_expenses);
    println!("Predicted Savings: {}", prediction.predicted_savings);
    println!();
    println!("Note: the model is trained on random placeholder data, not your");
    println!("history, so treat this number as a demo rather than a forecast.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseRecord, Money};
    use crate::storage::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_predict_without_expenses_is_ok() {
        let store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(handle_predict(&store, &mut rng).is_ok());
    }

    #[test]
    fn test_predict_with_expenses_is_ok() {
        let store = MemoryStore::new();
        let mut record = ExpenseRecord::new();
        record.set(Category::Rent, Money::from_cents(100000));
        store.save_expenses(&record).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        assert!(handle_predict(&store, &mut rng).is_ok());
    }
}
