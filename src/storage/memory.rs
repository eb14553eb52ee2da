//! In-memory implementation of `BudgetStore`
//!
//! Used by tests to exercise the analysis, prediction, and planning code
//! without touching the real filesystem.

use std::cell::RefCell;

use crate::error::BudgetResult;
use crate::models::{ExpenseRecord, Money};

use super::BudgetStore;

/// In-memory store with the same overwrite semantics as `FileStore`
#[derive(Debug, Default)]
pub struct MemoryStore {
    income: RefCell<Option<Money>>,
    expenses: RefCell<Option<ExpenseRecord>>,
}

impl MemoryStore {
    /// Create an empty store (no income, no expenses)
    pub fn new() -> Self {
        Self::default()
    }
}

impl BudgetStore for MemoryStore {
    fn save_income(&self, income: Money) -> BudgetResult<()> {
        *self.income.borrow_mut() = Some(income);
        Ok(())
    }

    fn load_income(&self) -> BudgetResult<Option<Money>> {
        Ok(*self.income.borrow())
    }

    fn save_expenses(&self, record: &ExpenseRecord) -> BudgetResult<()> {
        *self.expenses.borrow_mut() = Some(*record);
        Ok(())
    }

    fn load_expenses(&self) -> BudgetResult<Option<ExpenseRecord>> {
        Ok(*self.expenses.borrow())
    }
}
