//! Terminal User Interface module
//!
//! This module provides the interactive dashboard for budgetscope using
//! ratatui. A sidebar selects among six sections: Home, Income Input,
//! Expense Input, Spending Analysis, Savings Prediction, and Investment
//! Planning.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
