//! Storage layer for budgetscope
//!
//! Two flat files hold all cross-interaction state: `income.txt` (one amount
//! as plain text) and `expenses.csv` (a header row of the six category names
//! and one data row of amounts). The `BudgetStore` trait abstracts over the
//! backing store so the analysis, prediction, and planning code can be tested
//! against an in-memory fake.

pub mod file_io;
pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::error::BudgetResult;
use crate::models::{ExpenseRecord, Money};

/// Persistence contract for the two stored values.
///
/// Both values are optional: a `None` from a load means the value was never
/// saved, which every consumer treats as a handled condition (a warning),
/// not an error. Saves overwrite wholesale; last write wins.
pub trait BudgetStore {
    /// Persist the monthly income, replacing any prior value
    fn save_income(&self, income: Money) -> BudgetResult<()>;

    /// Load the monthly income, or `None` if it was never saved
    fn load_income(&self) -> BudgetResult<Option<Money>>;

    /// Persist the expense record, replacing any prior record
    fn save_expenses(&self, record: &ExpenseRecord) -> BudgetResult<()>;

    /// Load the expense record, or `None` if it was never saved
    fn load_expenses(&self) -> BudgetResult<Option<ExpenseRecord>>;
}
