//! Status bar view
//!
//! Shows the transient status message and key hints for the current context.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FocusedPanel, Section};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = hints_for(app);

    // Pad by character count, not byte length; the hints contain
    // multi-byte arrow symbols
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

/// Key hints for the current panel and section
fn hints_for(app: &App) -> &'static str {
    if app.focused_panel == FocusedPanel::Sidebar {
        return " j/k:Move  Enter:Open  1-6:Jump  q:Quit ";
    }

    match app.active_section {
        Section::Home => " Esc:Sidebar  q:Quit ",
        Section::IncomeInput => " 0-9:Type  +/-:Step  Enter:Save  Esc:Sidebar ",
        Section::ExpenseInput => " ↑/↓:Field  0-9:Type  +/-:Step  Enter:Save  Esc:Sidebar ",
        Section::SpendingAnalysis => " r:Refresh  Esc:Sidebar  q:Quit ",
        Section::SavingsPrediction => " r:Re-run  Esc:Sidebar  q:Quit ",
        Section::InvestmentPlanning => {
            " ←/→:Risk  ↑/↓:Years  Enter:Simulate  Esc:Sidebar  q:Quit "
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::storage::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_hints_with_arrows_reach_right_edge() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);
        app.active_section = Section::InvestmentPlanning;
        app.focused_panel = FocusedPanel::Main;

        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, &mut app, frame.area()))
            .unwrap();

        let row: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(row.ends_with(hints_for(&app)));
    }
}
