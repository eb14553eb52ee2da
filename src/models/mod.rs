//! Core data models for budgetscope

pub mod category;
pub mod expenses;
pub mod money;
pub mod risk;

pub use category::Category;
pub use expenses::ExpenseRecord;
pub use money::Money;
pub use risk::RiskTier;
