//! User settings for budgetscope
//!
//! Manages user preferences: entry step increments and defaults for the
//! investment planner.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::RiskTier;

/// User settings for budgetscope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Step increment (in cents) for the income entry field.
    /// UI convenience only, not a validation rule.
    #[serde(default = "default_income_step")]
    pub income_step_cents: i64,

    /// Step increment (in cents) for the expense entry fields
    #[serde(default = "default_expense_step")]
    pub expense_step_cents: i64,

    /// Default risk tier for the investment planner
    #[serde(default)]
    pub default_risk_tier: RiskTier,

    /// Default investment horizon in years
    #[serde(default = "default_horizon")]
    pub default_horizon_years: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_income_step() -> i64 {
    10000 // $100
}

fn default_expense_step() -> i64 {
    1000 // $10
}

fn default_horizon() -> u32 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            income_step_cents: default_income_step(),
            expense_step_cents: default_expense_step(),
            default_risk_tier: RiskTier::default(),
            default_horizon_years: default_horizon(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
