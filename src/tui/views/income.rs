//! Income input section view

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the income input section
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let content = super::section_frame(frame, app, area);
    if content.height < 3 {
        return;
    }

    let prompt = Paragraph::new("Enter your total monthly income:")
        .style(Style::default().fg(Color::White));
    frame.render_widget(prompt, Rect { height: 1, ..content });

    let input_area = Rect {
        y: content.y + 2,
        height: 1,
        ..content
    };
    frame.render_widget(&app.income_input, input_area);

    if content.height >= 5 {
        let note_area = Rect {
            y: content.y + 4,
            height: 1,
            ..content
        };
        let note = Paragraph::new(Line::from(
            "Saving overwrites the previous value; there is no history.",
        ))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(note, note_area);
    }
}
