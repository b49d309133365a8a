//! One-line footer with key hints and the simulator's last result.
//!
//! The right edge shows the outcome of the most recent send ("P1 jumped
//! to 10 at event 2") while the notification is live, and falls back to
//! an idle marker once it expires.

use crate::ui::theme::{Palette, Styles};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

const IDLE_TEXT: &str = "Ready";

/// A key/label pair shown in the footer.
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// The footer line: mode chip, key hints, and the latest notification.
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    mode: &'a str,
    hints: &'a [KeyHint],
    notification: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: &'a str, hints: &'a [KeyHint]) -> Self {
        Self {
            mode,
            hints,
            notification: None,
        }
    }

    /// Show a transient message on the right edge instead of the idle text.
    #[must_use]
    pub fn notification(mut self, text: Option<&'a str>) -> Self {
        self.notification = text;
        self
    }
}

impl Widget for StatusBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        for x in area.x..area.x.saturating_add(area.width) {
            buf[(x, area.y)].set_char(' ').set_bg(Palette::STATUS_BG);
        }

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.mode),
                Styles::default().bg(Palette::ACCENT).fg(Palette::BG),
            ),
            Span::styled(" ", Styles::status_bar()),
        ];
        for hint in self.hints {
            spans.push(Span::styled(format!(" {} ", hint.key), Styles::key_hint()));
            spans.push(Span::styled(
                format!(" {} ", hint.label),
                Styles::key_label(),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let (text, style) = match self.notification {
            Some(text) => (text, Styles::success().bg(Palette::STATUS_BG)),
            None => (IDLE_TEXT, Styles::status_bar()),
        };
        let text_len = text.len() as u16;
        if text_len < area.width {
            let x = area.x + area.width - text_len - 1;
            buf.set_string(x, area.y, text, style);
        }
    }
}
