//! Investment planning CLI command

use clap::Args;
use rand::Rng;

use crate::config::Settings;
use crate::display;
use crate::error::BudgetResult;
use crate::models::RiskTier;
use crate::services::investment::{simulate_growth, MAX_HORIZON_YEARS, MIN_HORIZON_YEARS};

/// Arguments for the invest command
#[derive(Args)]
pub struct InvestArgs {
    /// Risk tolerance tier
    #[arg(short, long, value_enum)]
    pub risk: Option<RiskTier>,

    /// Investment time horizon in years
    #[arg(short = 'y', long, value_parser = clap::value_parser!(u32).range(MIN_HORIZON_YEARS as i64..=MAX_HORIZON_YEARS as i64))]
    pub years: Option<u32>,

    /// Run the growth simulation (suggestions are always shown)
    #[arg(short, long)]
    pub simulate: bool,
}

/// Handle the invest command
pub fn handle_invest<R: Rng>(
    settings: &Settings,
    args: InvestArgs,
    rng: &mut R,
) -> BudgetResult<()> {
    let tier = args.risk.unwrap_or(settings.default_risk_tier);
    let years = args.years.unwrap_or(settings.default_horizon_years);

    print!("{}", display::investment::format_suggestions(tier));

    if args.simulate {
        let curve = simulate_growth(rng, years)?;
        println!();
        print!("{}", display::investment::format_growth(&curve));
    }

    Ok(())
}
