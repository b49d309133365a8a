//! Bounded integer input widget.
//!
//! The simulator's controls are all small numbers (process count,
//! process indices, event indices), edited by typing digits or stepping
//! with the arrow keys. Typed values may briefly sit outside the bounds
//! the way a browser number box allows; [`NumberInputState::value`]
//! clamps on read.

use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Editable state of a bounded integer field.
#[derive(Debug, Clone)]
pub struct NumberInputState {
    raw: usize,
    min: usize,
    max: usize,
}

impl NumberInputState {
    /// Create a field with an initial value and inclusive bounds.
    pub fn new(value: usize, min: usize, max: usize) -> Self {
        Self {
            raw: value,
            min,
            max,
        }
    }

    /// The value clamped into `[min, max]`.
    pub fn value(&self) -> usize {
        self.raw.clamp(self.min, self.max)
    }

    /// The value exactly as edited, possibly below `min`.
    pub fn raw(&self) -> usize {
        self.raw
    }

    /// Lower bound.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Step the value up, stopping at the upper bound.
    pub fn increase(&mut self) {
        self.raw = (self.value() + 1).min(self.max);
    }

    /// Step the value down, stopping at the lower bound.
    pub fn decrease(&mut self) {
        self.raw = self.value().saturating_sub(1).max(self.min);
    }

    /// Append a typed digit, starting over when the result would exceed
    /// the upper bound (typing "7" into a maxed field replaces it).
    pub fn push_digit(&mut self, digit: u8) {
        let digit = usize::from(digit);
        let candidate = self.raw * 10 + digit;
        self.raw = if candidate > self.max {
            digit.min(self.max)
        } else {
            candidate
        };
    }

    /// Remove the last typed digit.
    pub fn backspace(&mut self) {
        self.raw /= 10;
    }
}

/// Renders a [`NumberInputState`] as a small bordered field.
#[derive(Debug)]
pub struct NumberInput<'a> {
    state: &'a NumberInputState,
    label: &'a str,
    focused: bool,
}

impl<'a> NumberInput<'a> {
    /// Create a widget for the given field state.
    pub fn new(state: &'a NumberInputState, label: &'a str) -> Self {
        Self {
            state,
            label,
            focused: false,
        }
    }

    /// Set focus state.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for NumberInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Styles::border_active()
        } else {
            Styles::border()
        };

        let block = Block::default()
            .title(format!(" {} ", self.label))
            .title_style(if self.focused {
                Styles::title()
            } else {
                Styles::dim()
            })
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Styles::default());

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 1 || inner.width < 1 {
            return;
        }

        let value_style = if self.focused {
            Styles::highlight()
        } else {
            Styles::default()
        };

        let mut spans = vec![Span::styled(format!(" {}", self.state.raw()), value_style)];
        if self.focused {
            spans.push(Span::styled("_", Styles::highlight()));
        }
        spans.push(Span::styled(
            format!("  {}-{}", self.state.min(), self.state.max()),
            Styles::dim(),
        ));

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepping_respects_bounds() {
        let mut state = NumberInputState::new(9, 0, 9);
        state.increase();
        assert_eq!(state.value(), 9);

        let mut state = NumberInputState::new(1, 1, 10);
        state.decrease();
        assert_eq!(state.value(), 1);

        state.increase();
        assert_eq!(state.value(), 2);
    }

    #[test]
    fn test_typed_digits_accumulate_within_bounds() {
        let mut state = NumberInputState::new(0, 1, 10);
        state.push_digit(1);
        assert_eq!(state.raw(), 1);
        state.push_digit(0);
        assert_eq!(state.raw(), 10);
        // 100 would overflow the bound, so typing restarts with the digit.
        state.push_digit(3);
        assert_eq!(state.raw(), 3);
    }

    #[test]
    fn test_value_clamps_raw_below_min() {
        let mut state = NumberInputState::new(5, 1, 10);
        state.backspace();
        assert_eq!(state.raw(), 0);
        assert_eq!(state.value(), 1);
    }

    #[test]
    fn test_render_shows_value_and_bounds() {
        let state = NumberInputState::new(5, 1, 10);
        let area = Rect::new(0, 0, 16, 3);
        let mut buf = Buffer::empty(area);
        NumberInput::new(&state, "Processes").render(area, &mut buf);

        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf.cell((x, y)).unwrap().symbol());
            }
        }
        assert!(text.contains("Processes"));
        assert!(text.contains('5'));
        assert!(text.contains("1-10"));
    }
}
