//! Expense input section view

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the expense input section
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let content = super::section_frame(frame, app, area);
    if content.height < 2 {
        return;
    }

    let prompt = Paragraph::new("Enter your monthly expenses per category:")
        .style(Style::default().fg(Color::White));
    frame.render_widget(prompt, Rect { height: 1, ..content });

    for (i, input) in app.expense_inputs.iter().enumerate() {
        let y = content.y + 2 + i as u16;
        if y >= content.y + content.height {
            break;
        }
        let input_area = Rect {
            y,
            height: 1,
            ..content
        };
        frame.render_widget(input, input_area);
    }

    let note_y = content.y + 2 + app.expense_inputs.len() as u16 + 1;
    if note_y < content.y + content.height {
        let note = Paragraph::new(Line::from(
            "Enter saves all six categories together, replacing the stored record.",
        ))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            note,
            Rect {
                y: note_y,
                height: 1,
                ..content
            },
        );
    }
}
