//! Expense CLI commands

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, ExpenseRecord, Money};
use crate::storage::BudgetStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Save the monthly expense record, overwriting any prior record.
    /// All six categories are saved together; omitted categories are zero.
    Set {
        /// Rent expense
        #[arg(long, default_value = "0")]
        rent: String,

        /// Utilities expense
        #[arg(long, default_value = "0")]
        utilities: String,

        /// Groceries expense
        #[arg(long, default_value = "0")]
        groceries: String,

        /// Transportation expense
        #[arg(long, default_value = "0")]
        transportation: String,

        /// Entertainment expense
        #[arg(long, default_value = "0")]
        entertainment: String,

        /// Other expenses
        #[arg(long, default_value = "0")]
        others: String,
    },

    /// Show the stored expense record
    Show,
}

fn parse_non_negative(category: Category, raw: &str) -> BudgetResult<Money> {
    let amount = Money::parse(raw).map_err(|e| {
        BudgetError::Validation(format!("Invalid amount for {}: {}", category, e))
    })?;

    if amount.is_negative() {
        return Err(BudgetError::Validation(format!(
            "Expense for {} must be non-negative",
            category
        )));
    }

    Ok(amount)
}

/// Handle an expense command
pub fn handle_expense_command(store: &dyn BudgetStore, cmd: ExpenseCommands) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Set {
            rent,
            utilities,
            groceries,
            transportation,
            entertainment,
            others,
        } => {
            let mut record = ExpenseRecord::new();
            let inputs = [
                (Category::Rent, rent),
                (Category::Utilities, utilities),
                (Category::Groceries, groceries),
                (Category::Transportation, transportation),
                (Category::Entertainment, entertainment),
                (Category::Others, others),
            ];

            // Validate everything before saving anything
            for (category, raw) in &inputs {
                record.set(*category, parse_non_negative(*category, raw)?);
            }

            store.save_expenses(&record)?;
            println!("Expenses saved! Total: {}", record.total());
        }

        ExpenseCommands::Show => match store.load_expenses()? {
            Some(record) => {
                println!("Your Monthly Expenses:");
                for (category, amount) in record.entries() {
                    println!("  {:<16} {:>12}", category.to_string(), amount.to_string());
                }
                println!("  {:<16} {:>12}", "Total", record.total().to_string());
            }
            None => println!("{}", super::NO_EXPENSES_WARNING),
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn set_cmd(rent: &str, entertainment: &str) -> ExpenseCommands {
        ExpenseCommands::Set {
            rent: rent.into(),
            utilities: "200".into(),
            groceries: "300".into(),
            transportation: "100".into(),
            entertainment: entertainment.into(),
            others: "50".into(),
        }
    }

    #[test]
    fn test_set_saves_all_categories_together() {
        let store = MemoryStore::new();

        handle_expense_command(&store, set_cmd("1000", "50")).unwrap();

        let record = store.load_expenses().unwrap().unwrap();
        assert_eq!(record.get(Category::Rent).cents(), 100000);
        assert_eq!(record.get(Category::Others).cents(), 5000);
        assert_eq!(record.total().cents(), 170000);
    }

    #[test]
    fn test_invalid_category_aborts_whole_save() {
        let store = MemoryStore::new();

        let err = handle_expense_command(&store, set_cmd("1000", "-50")).unwrap_err();
        assert!(err.is_validation());
        // No partial save
        assert!(store.load_expenses().unwrap().is_none());
    }
}
