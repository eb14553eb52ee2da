//! Reusable TUI widgets

pub mod amount_input;

pub use amount_input::AmountInput;
