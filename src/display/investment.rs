//! Terminal rendering of the investment simulation

use crate::display::format::{format_bar, separator};
use crate::models::RiskTier;
use crate::services::GrowthCurve;

const BAR_WIDTH: usize = 36;

/// Format the static suggestion list for a risk tier
pub fn format_suggestions(tier: RiskTier) -> String {
    let mut output = String::new();
    output.push_str(&format!("Suggestions for {} risk tolerance:\n", tier));
    for suggestion in tier.suggestions() {
        output.push_str(&format!("  - {}\n", suggestion));
    }
    output
}

/// Format a growth curve as a year-by-year table with bars
pub fn format_growth(curve: &GrowthCurve) -> String {
    let mut output = String::new();

    output.push_str("Simulated Investment Growth (multiple of initial amount)\n");
    output.push_str(&separator(64));
    output.push('\n');

    let max_growth = curve.growth.iter().copied().fold(0.0_f64, f64::max);

    for (i, (growth, annual_return)) in curve.growth.iter().zip(&curve.returns).enumerate() {
        output.push_str(&format!(
            "Year {:>2}  {} {:>6.3}x  ({:+.1}%)\n",
            i + 1,
            format_bar(*growth, max_growth, BAR_WIDTH),
            growth,
            annual_return * 100.0
        ));
    }

    output.push_str(&separator(64));
    output.push('\n');
    output.push_str(&format!(
        "Final growth multiple: {:.3}x\n",
        curve.final_multiple()
    ));

    output
}
