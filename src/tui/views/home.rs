//! Home section view

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the home section
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let content = super::section_frame(frame, app, area);

    let lines = vec![
        Line::from("Welcome to the Personal Finance Tool"),
        Line::from(""),
        Line::from("This tool helps you:"),
        Line::from("  - Analyze your monthly expenses"),
        Line::from("  - Predict future savings"),
        Line::from("  - Plan your investments"),
        Line::from(""),
        Line::from("Pick a section from the sidebar to get started."),
    ];

    let paragraph = Paragraph::new(lines).style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, content);
}
