//! TUI Views module
//!
//! Contains the render functions for the six dashboard sections, plus the
//! sidebar and status bar.

pub mod analysis;
pub mod expenses;
pub mod home;
pub mod income;
pub mod investment;
pub mod prediction;
pub mod sidebar;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, FocusedPanel, Section};
use super::layout::{AppLayout, MainPanelLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_section {
        Section::Home => home::render(frame, app, layout.main),
        Section::IncomeInput => income::render(frame, app, layout.main),
        Section::ExpenseInput => expenses::render(frame, app, layout.main),
        Section::SpendingAnalysis => analysis::render(frame, app, layout.main),
        Section::SavingsPrediction => prediction::render(frame, app, layout.main),
        Section::InvestmentPlanning => investment::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}

/// Render the section header and return the content area
pub(super) fn section_frame(frame: &mut Frame, app: &App, area: Rect) -> Rect {
    let layout = MainPanelLayout::new(area);

    let border_color = if app.focused_panel == FocusedPanel::Main {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let header = Paragraph::new(app.active_section.title())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

    frame.render_widget(header, layout.header);
    layout.content
}
