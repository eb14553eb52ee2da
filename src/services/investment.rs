//! Investment growth simulation
//!
//! Draws one annual return per year from a fixed normal distribution and
//! compounds them into a growth curve. The risk tier selects the static
//! suggestion list only; it does not affect the simulated distribution,
//! matching the original tool.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{BudgetError, BudgetResult};

/// Minimum investment horizon in whole years
pub const MIN_HORIZON_YEARS: u32 = 1;

/// Maximum investment horizon in whole years
pub const MAX_HORIZON_YEARS: u32 = 30;

/// Mean of the annual return distribution
pub const MEAN_ANNUAL_RETURN: f64 = 0.10;

/// Standard deviation of the annual return distribution
pub const RETURN_STD_DEV: f64 = 0.02;

/// One simulated compounded growth path
#[derive(Debug, Clone)]
pub struct GrowthCurve {
    /// Sampled annual returns, one per year
    pub returns: Vec<f64>,
    /// Cumulative growth multiples: `growth[t] = prod(1 + returns[..=t])`
    pub growth: Vec<f64>,
}

impl GrowthCurve {
    /// Growth multiple at the end of the horizon (1.0 for an empty curve)
    pub fn final_multiple(&self) -> f64 {
        self.growth.last().copied().unwrap_or(1.0)
    }
}

/// Simulate a compounded growth curve over the given horizon.
///
/// The RNG is injected so tests can supply a deterministic sequence.
pub fn simulate_growth<R: Rng>(rng: &mut R, horizon_years: u32) -> BudgetResult<GrowthCurve> {
    if !(MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&horizon_years) {
        return Err(BudgetError::Validation(format!(
            "Horizon must be between {} and {} years, got {}",
            MIN_HORIZON_YEARS, MAX_HORIZON_YEARS, horizon_years
        )));
    }

    let normal = Normal::new(MEAN_ANNUAL_RETURN, RETURN_STD_DEV)
        .map_err(|e| BudgetError::Validation(format!("Invalid return distribution: {}", e)))?;

    let returns: Vec<f64> = (0..horizon_years).map(|_| normal.sample(rng)).collect();

    let mut growth = Vec::with_capacity(returns.len());
    let mut acc = 1.0;
    for r in &returns {
        acc *= 1.0 + r;
        growth.push(acc);
    }

    Ok(GrowthCurve { returns, growth })
}
