//! Numeric amount input widget
//!
//! A text field constrained to non-negative decimal amounts, with a
//! configurable step increment applied on +/- for entry convenience.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::models::Money;

/// A numeric input field for a non-negative money amount
#[derive(Debug, Clone)]
pub struct AmountInput {
    /// Current text content (digits and at most one '.')
    pub content: String,
    /// Whether the input is focused
    pub focused: bool,
    /// Field label
    pub label: String,
    /// Step increment in cents for +/- keys
    pub step_cents: i64,
}

impl AmountInput {
    /// Create a new amount input with the given label and step
    pub fn new(label: impl Into<String>, step_cents: i64) -> Self {
        Self {
            content: String::new(),
            focused: false,
            label: label.into(),
            step_cents,
        }
    }

    /// Set focused state
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Insert a character if it keeps the content a valid amount
    pub fn insert(&mut self, c: char) {
        let valid = c.is_ascii_digit() || (c == '.' && !self.content.contains('.'));
        if valid {
            self.content.push(c);
        }
    }

    /// Delete the last character
    pub fn backspace(&mut self) {
        self.content.pop();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Parse the current content as a money amount (empty parses as zero)
    pub fn amount(&self) -> Option<Money> {
        if self.content.is_empty() {
            return Some(Money::zero());
        }
        Money::parse(&self.content).ok().filter(|m| !m.is_negative())
    }

    /// Increase the amount by one step
    pub fn step_up(&mut self) {
        if let Some(amount) = self.amount() {
            self.set_amount(amount + Money::from_cents(self.step_cents));
        }
    }

    /// Decrease the amount by one step, stopping at zero
    pub fn step_down(&mut self) {
        if let Some(amount) = self.amount() {
            let stepped = amount - Money::from_cents(self.step_cents);
            self.set_amount(if stepped.is_negative() {
                Money::zero()
            } else {
                stepped
            });
        }
    }

    /// Replace the content with a formatted amount
    pub fn set_amount(&mut self, amount: Money) {
        self.content = format!("{}.{:02}", amount.dollars(), amount.cents_part());
    }
}

impl Widget for &AmountInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };

        let value_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let marker = if self.focused { "> " } else { "  " };
        let display = if self.content.is_empty() {
            "0"
        } else {
            self.content.as_str()
        };

        let mut spans = vec![
            Span::raw(marker),
            Span::styled(format!("{:<16}", self.label), label_style),
            Span::raw("$ "),
            Span::styled(display.to_string(), value_style),
        ];

        if self.focused {
            spans.push(Span::styled("_", Style::default().fg(Color::Black).bg(Color::Cyan)));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_non_numeric() {
        let mut input = AmountInput::new("Rent", 1000);
        input.insert('1');
        input.insert('a');
        input.insert('2');
        assert_eq!(input.content, "12");
    }

    #[test]
    fn test_insert_allows_single_decimal_point() {
        let mut input = AmountInput::new("Rent", 1000);
        input.insert('1');
        input.insert('.');
        input.insert('.');
        input.insert('5');
        assert_eq!(input.content, "1.5");
    }

    #[test]
    fn test_empty_amount_is_zero() {
        let input = AmountInput::new("Rent", 1000);
        assert_eq!(input.amount(), Some(Money::zero()));
    }

    #[test]
    fn test_step_up_down() {
        let mut input = AmountInput::new("Rent", 1000);
        input.step_up();
        assert_eq!(input.amount(), Some(Money::from_cents(1000)));
        assert_eq!(input.content, "10.00");

        input.step_down();
        assert_eq!(input.amount(), Some(Money::zero()));
    }

    #[test]
    fn test_step_down_stops_at_zero() {
        let mut input = AmountInput::new("Rent", 1000);
        input.insert('5');
        input.step_down();
        assert_eq!(input.amount(), Some(Money::zero()));
    }

    #[test]
    fn test_backspace() {
        let mut input = AmountInput::new("Rent", 1000);
        input.insert('1');
        input.insert('2');
        input.backspace();
        assert_eq!(input.content, "1");
    }
}
