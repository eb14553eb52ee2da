//! Income CLI commands

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::storage::BudgetStore;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Save your total monthly income, overwriting any prior value
    Set {
        /// Income amount (e.g., "3000" or "3000.00")
        amount: String,
    },

    /// Show the stored monthly income
    Show,
}

/// Handle an income command
pub fn handle_income_command(store: &dyn BudgetStore, cmd: IncomeCommands) -> BudgetResult<()> {
    match cmd {
        IncomeCommands::Set { amount } => {
            let amount = Money::parse(&amount)
                .map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))?;

            if amount.is_negative() {
                return Err(BudgetError::Validation(
                    "Income must be non-negative".into(),
                ));
            }

            store.save_income(amount)?;
            println!("Monthly income saved successfully: {}", amount);
        }

        IncomeCommands::Show => match store.load_income()? {
            Some(income) => println!("Monthly income: {}", income),
            None => {
                println!("No monthly income saved yet.");
                println!("Use 'budgetscope income set <amount>' to save it.");
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_set_saves_income() {
        let store = MemoryStore::new();

        handle_income_command(
            &store,
            IncomeCommands::Set {
                amount: "3000".into(),
            },
        )
        .unwrap();

        assert_eq!(store.load_income().unwrap(), Some(Money::from_cents(300000)));
    }

    #[test]
    fn test_set_rejects_negative() {
        let store = MemoryStore::new();

        let err = handle_income_command(
            &store,
            IncomeCommands::Set {
                amount: "-100".into(),
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(store.load_income().unwrap().is_none());
    }

    #[test]
    fn test_set_rejects_garbage() {
        let store = MemoryStore::new();

        let err = handle_income_command(
            &store,
            IncomeCommands::Set {
                amount: "lots".into(),
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
    }
}
