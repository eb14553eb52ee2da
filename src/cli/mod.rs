//! CLI command handlers for budgetscope
//!
//! Each handler mirrors one section of the dashboard: income entry, expense
//! entry, spending analysis, savings prediction, and investment planning.
//! Handlers compose only through the storage layer.

pub mod analyze;
pub mod expenses;
pub mod income;
pub mod invest;
pub mod predict;

pub use analyze::handle_analyze;
pub use expenses::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use invest::{handle_invest, InvestArgs};
pub use predict::handle_predict;

/// Warning shown whenever a section needs the expense record and it is absent
pub const NO_EXPENSES_WARNING: &str = "No expense data found. Please input expenses first.";

/// Warning shown when the analysis needs income and it is absent
pub const NO_INCOME_WARNING: &str =
    "Monthly income not provided. Set it with 'budgetscope income set <amount>'.";
