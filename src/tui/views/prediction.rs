//! Savings prediction section view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::cli::NO_EXPENSES_WARNING;
use crate::services::estimator::TRAINING_SAMPLES;
use crate::tui::app::App;

/// Render the savings prediction section
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let content = super::section_frame(frame, app, area);

    let Some(prediction) = app.prediction.as_ref() else {
        let warning = Paragraph::new(NO_EXPENSES_WARNING)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(warning, content);
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Your total monthly expenses: "),
            Span::styled(
                prediction.total_expenses.to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Predicted Savings: "),
            Span::styled(
                prediction.predicted_savings.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Fitted model: "),
            Span::styled(
                format!(
                    "savings = {:.4} * expenses + {:.2}",
                    prediction.model.slope, prediction.model.intercept
                ),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(""),
        Line::styled(
            format!(
                "Trained on {} randomly generated placeholder samples, not your",
                TRAINING_SAMPLES
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Line::styled(
            "real history. Press 'r' to refit on a fresh draw.",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), content);
}
