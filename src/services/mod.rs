//! Service layer for budgetscope
//!
//! One-shot, stateless computations over the storage layer: spending
//! analysis, the toy savings prediction, and the investment growth
//! simulation. Each runs to completion per interaction; nothing is cached
//! between calls.

pub mod analysis;
pub mod estimator;
pub mod investment;

pub use analysis::SpendingAnalysis;
pub use estimator::{predict_savings, LinearModel, SavingsPrediction};
pub use investment::{simulate_growth, GrowthCurve};
