//! The monthly expense record
//!
//! A single record mapping each of the six fixed categories to a non-negative
//! amount. The record is overwritten wholesale on every save; there is no
//! per-category update path and no history.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// One amount per fixed expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpenseRecord {
    amounts: [Money; 6],
}

impl ExpenseRecord {
    /// Create an empty record (all categories zero)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the amount for a category
    pub fn get(&self, category: Category) -> Money {
        self.amounts[Self::index(category)]
    }

    /// Set the amount for a category
    pub fn set(&mut self, category: Category, amount: Money) {
        self.amounts[Self::index(category)] = amount;
    }

    /// Sum of all category amounts
    pub fn total(&self) -> Money {
        self.amounts.iter().copied().sum()
    }

    /// Proportional share of each category with a nonzero amount.
    ///
    /// Returns an empty vec when the total is zero, so callers can skip
    /// chart rendering without special-casing division by zero.
    pub fn shares(&self) -> Vec<(Category, f64)> {
        let total = self.total();
        if total.is_zero() {
            return Vec::new();
        }

        Category::ALL
            .iter()
            .filter(|c| !self.get(**c).is_zero())
            .map(|c| {
                let share = self.get(*c).cents() as f64 / total.cents() as f64;
                (*c, share)
            })
            .collect()
    }

    /// Iterate all (category, amount) pairs in display order
    pub fn entries(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        Category::ALL.iter().map(|c| (*c, self.get(*c)))
    }

    fn index(category: Category) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0)
    }
}
