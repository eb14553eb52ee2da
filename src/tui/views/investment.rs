//! Investment planning section view
//!
//! Risk tier selector, horizon slider, the static suggestion list, and a
//! line chart of the last simulated growth curve.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::models::RiskTier;
use crate::tui::app::App;

/// Render the investment planning section
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let content = super::section_frame(frame, app, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(6)])
        .split(content);

    render_controls(frame, app, chunks[0]);
    render_chart(frame, app, chunks[1]);
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let mut tier_spans = vec![Span::raw("Risk tolerance:  ")];
    for (i, tier) in RiskTier::ALL.iter().enumerate() {
        if i > 0 {
            tier_spans.push(Span::raw("  "));
        }
        let style = if *tier == app.risk_tier {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tier_spans.push(Span::styled(format!(" {} ", tier), style));
    }

    let mut lines = vec![
        Line::from(tier_spans),
        Line::from(vec![
            Span::raw("Horizon:         "),
            Span::styled(
                format!("{} years", app.horizon_years),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Suggested for "),
            Span::styled(
                app.risk_tier.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" risk tolerance:"),
        ]),
    ];
    for suggestion in app.risk_tier.suggestions() {
        lines.push(Line::from(vec![
            Span::raw("  - "),
            Span::styled(*suggestion, Style::default().fg(Color::Green)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let Some(curve) = app.growth_curve.as_ref() else {
        let hint = Paragraph::new("Press Enter to simulate growth over your horizon.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
        return;
    };

    // Start the path at (0, 1.0) so year one shows as a segment, not a dot
    let mut points: Vec<(f64, f64)> = Vec::with_capacity(curve.growth.len() + 1);
    points.push((0.0, 1.0));
    points.extend(
        curve
            .growth
            .iter()
            .enumerate()
            .map(|(i, g)| ((i + 1) as f64, *g)),
    );

    let max_years = curve.growth.len() as f64;
    let y_max = points.iter().map(|(_, y)| *y).fold(1.0_f64, f64::max);
    let y_min = points.iter().map(|(_, y)| *y).fold(1.0_f64, f64::min);

    let datasets = vec![Dataset::default()
        .name(format!("{:.2}x final", curve.final_multiple()))
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Projected Growth of $1 "),
        )
        .x_axis(
            Axis::default()
                .title("Years")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_years])
                .labels([
                    "0".to_string(),
                    format!("{}", (max_years / 2.0).round() as u32),
                    format!("{}", max_years as u32),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Multiple")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_min, y_max])
                .labels([
                    format!("{:.2}", y_min),
                    format!("{:.2}", (y_min + y_max) / 2.0),
                    format!("{:.2}", y_max),
                ]),
        );

    frame.render_widget(chart, area);
}
