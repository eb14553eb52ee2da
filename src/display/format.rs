//! Formatting helpers for terminal output

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(58.8), "59%");
        assert_eq!(format_percentage(5.88), "5.9%");
        assert_eq!(format_percentage(0.05), "0.05%");
    }

    #[test]
    fn test_format_bar_full_and_empty() {
        assert_eq!(format_bar(1.0, 1.0, 4), "████");
        assert_eq!(format_bar(0.0, 1.0, 4), "    ");
        assert_eq!(format_bar(0.5, 1.0, 4), "██░░");
    }

    #[test]
    fn test_format_bar_zero_max_does_not_panic() {
        assert_eq!(format_bar(1.0, 0.0, 4), "    ");
    }
}
