//! Spending analysis section view
//!
//! Shows the stored record, the proportional category breakdown, and the
//! savings potential when income is available. Missing data renders as
//! warnings, never as errors.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::cli::{NO_EXPENSES_WARNING, NO_INCOME_WARNING};
use crate::display::format::{format_bar, format_percentage};
use crate::tui::app::App;

const BAR_WIDTH: usize = 24;

/// Render the spending analysis section
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let content = super::section_frame(frame, app, area);

    let Some(analysis) = app.analysis.as_ref() else {
        let warning = Paragraph::new(NO_EXPENSES_WARNING)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(warning, content);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled(
        "Your Monthly Expenses:",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    for (category, amount) in analysis.record.entries() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<16}", category.to_string()),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:>12}", amount.to_string()),
                Style::default().fg(Color::Green),
            ),
        ]));
    }
    lines.push(Line::from(""));

    if analysis.shares.is_empty() {
        lines.push(Line::styled(
            "All amounts are zero; nothing to chart.",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        lines.push(Line::styled(
            "Spending Breakdown:",
            Style::default().add_modifier(Modifier::BOLD),
        ));

        let max_share = analysis
            .shares
            .iter()
            .map(|(_, s)| *s)
            .fold(0.0_f64, f64::max);

        for (category, share) in &analysis.shares {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<16}", category.to_string()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format_bar(*share, max_share, BAR_WIDTH),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!(" {:>6}", format_percentage(share * 100.0)),
                    Style::default().fg(Color::Yellow),
                ),
            ]));
        }
    }
    lines.push(Line::from(""));

    match (analysis.income, analysis.savings_potential) {
        (Some(income), Some(savings)) => {
            lines.push(Line::from(vec![
                Span::raw("Monthly income:            "),
                Span::styled(income.to_string(), Style::default().fg(Color::Green)),
            ]));
            lines.push(Line::from(vec![
                Span::raw("Your total expenses:       "),
                Span::styled(
                    analysis.total_expenses.to_string(),
                    Style::default().fg(Color::Green),
                ),
            ]));
            let savings_color = if savings.is_negative() {
                Color::Red
            } else {
                Color::Green
            };
            lines.push(Line::from(vec![
                Span::raw("Monthly savings potential: "),
                Span::styled(
                    savings.to_string(),
                    Style::default()
                        .fg(savings_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        _ => {
            lines.push(Line::styled(
                NO_INCOME_WARNING,
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    frame.render_widget(Paragraph::new(lines), content);
}
