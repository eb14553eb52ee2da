//! Configuration module for budgetscope
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
