//! Risk tiers for the investment planner
//!
//! A tier selects a static list of suggested asset classes. It deliberately
//! does not influence the simulated return distribution, matching the
//! original tool's behavior.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Investor risk tolerance tier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// All tiers in display order
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    /// Suggested asset classes for this tier
    pub const fn suggestions(&self) -> &'static [&'static str] {
        match self {
            RiskTier::Low => &["Bonds", "Treasury Notes"],
            RiskTier::Medium => &["Balanced Mutual Funds", "Index Funds"],
            RiskTier::High => &["Stocks", "ETFs"],
        }
    }

    /// Cycle to the next tier (for the TUI selector)
    pub const fn next(&self) -> RiskTier {
        match self {
            RiskTier::Low => RiskTier::Medium,
            RiskTier::Medium => RiskTier::High,
            RiskTier::High => RiskTier::Low,
        }
    }

    /// Cycle to the previous tier
    pub const fn prev(&self) -> RiskTier {
        match self {
            RiskTier::Low => RiskTier::High,
            RiskTier::Medium => RiskTier::Low,
            RiskTier::High => RiskTier::Medium,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        };
        f.write_str(name)
    }
}
