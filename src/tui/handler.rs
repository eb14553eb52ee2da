//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. Exactly one section handles each interaction; input
//! sections capture digit keys, so quitting from them goes through Esc and
//! the sidebar (Ctrl+C always quits).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, FocusedPanel, Section};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) => Ok(()),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_key(app, key),
    }

    Ok(())
}

/// Handle keys when the sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        KeyCode::Char('j') | KeyCode::Down => app.sidebar_down(),
        KeyCode::Char('k') | KeyCode::Up => app.sidebar_up(),

        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => {
            app.activate_selected_section();
        }

        // Direct section jumps
        KeyCode::Char(c @ '1'..='6') => {
            let index = (c as usize) - ('1' as usize);
            app.sidebar_index = index;
            app.activate_selected_section();
        }

        _ => {}
    }
}

/// Handle keys when the main panel is focused
fn handle_main_key(app: &mut App, key: KeyEvent) {
    // Keys that leave the main panel, regardless of section
    match key.code {
        KeyCode::Esc | KeyCode::Tab => {
            app.focus_sidebar();
            return;
        }
        _ => {}
    }

    match app.active_section {
        Section::Home => {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                app.quit();
            }
        }

        Section::IncomeInput => handle_income_key(app, key),
        Section::ExpenseInput => handle_expense_key(app, key),

        Section::SpendingAnalysis => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
            KeyCode::Char('r') => {
                app.refresh_analysis();
                app.set_status("Analysis refreshed");
            }
            _ => {}
        },

        Section::SavingsPrediction => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
            KeyCode::Char('r') => {
                app.run_prediction(&mut rand::thread_rng());
                app.set_status("Prediction re-run with fresh training data");
            }
            _ => {}
        },

        Section::InvestmentPlanning => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
            KeyCode::Char('h') | KeyCode::Left => app.prev_risk_tier(),
            KeyCode::Char('l') | KeyCode::Right => app.next_risk_tier(),
            KeyCode::Char('+') | KeyCode::Char('k') | KeyCode::Up => app.horizon_up(),
            KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => app.horizon_down(),
            KeyCode::Enter | KeyCode::Char('s') => {
                app.run_simulation(&mut rand::thread_rng());
            }
            _ => {}
        },
    }
}

/// Keys for the income entry field
fn handle_income_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c @ ('0'..='9' | '.')) => app.income_input.insert(c),
        KeyCode::Backspace => app.income_input.backspace(),
        KeyCode::Char('+') | KeyCode::Up => app.income_input.step_up(),
        KeyCode::Char('-') | KeyCode::Down => app.income_input.step_down(),
        KeyCode::Enter => app.save_income(),
        _ => {}
    }
}

/// Keys for the six expense entry fields
fn handle_expense_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c @ ('0'..='9' | '.')) => app.focused_expense_input().insert(c),
        KeyCode::Backspace => app.focused_expense_input().backspace(),
        KeyCode::Char('+') => app.focused_expense_input().step_up(),
        KeyCode::Char('-') => app.focused_expense_input().step_down(),
        KeyCode::Up => app.expense_focus_up(),
        KeyCode::Down => app.expense_focus_down(),
        KeyCode::Enter => app.save_expenses(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Money;
    use crate::storage::{BudgetStore, MemoryStore};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_quits_from_sidebar() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('q')))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_number_key_jumps_to_section() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('4')))).unwrap();
        assert_eq!(app.active_section, Section::SpendingAnalysis);
        assert_eq!(app.focused_panel, FocusedPanel::Main);
    }

    #[test]
    fn test_income_entry_and_save() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('2')))).unwrap();
        assert_eq!(app.active_section, Section::IncomeInput);

        for c in "3000".chars() {
            handle_event(&mut app, Event::Key(key(KeyCode::Char(c)))).unwrap();
        }
        handle_event(&mut app, Event::Key(key(KeyCode::Enter))).unwrap();

        assert_eq!(store.load_income().unwrap(), Some(Money::from_cents(300000)));
    }

    #[test]
    fn test_q_types_into_income_field_instead_of_quitting() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('2')))).unwrap();
        handle_event(&mut app, Event::Key(key(KeyCode::Char('q')))).unwrap();

        assert!(!app.should_quit);
        assert!(app.income_input.content.is_empty());
    }

    #[test]
    fn test_esc_returns_to_sidebar() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('3')))).unwrap();
        assert_eq!(app.focused_panel, FocusedPanel::Main);

        handle_event(&mut app, Event::Key(key(KeyCode::Esc))).unwrap();
        assert_eq!(app.focused_panel, FocusedPanel::Sidebar);
    }

    #[test]
    fn test_expense_field_navigation() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('3')))).unwrap();
        assert_eq!(app.expense_focus, 0);

        handle_event(&mut app, Event::Key(key(KeyCode::Down))).unwrap();
        assert_eq!(app.expense_focus, 1);

        handle_event(&mut app, Event::Key(key(KeyCode::Up))).unwrap();
        assert_eq!(app.expense_focus, 0);
    }

    #[test]
    fn test_investment_controls() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('6')))).unwrap();
        assert_eq!(app.active_section, Section::InvestmentPlanning);

        handle_event(&mut app, Event::Key(key(KeyCode::Right))).unwrap();
        assert_eq!(app.risk_tier.to_string(), "Medium");

        let before = app.horizon_years;
        handle_event(&mut app, Event::Key(key(KeyCode::Up))).unwrap();
        assert_eq!(app.horizon_years, before + 1);

        handle_event(&mut app, Event::Key(key(KeyCode::Enter))).unwrap();
        let curve = app.growth_curve.as_ref().unwrap();
        assert_eq!(curve.growth.len(), app.horizon_years as usize);
    }

    #[test]
    fn test_ctrl_c_quits_even_while_editing() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('2')))).unwrap();
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }
}
