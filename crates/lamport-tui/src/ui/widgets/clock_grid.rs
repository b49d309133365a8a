//! The timeline grid: one column per process, one row per event index.
//!
//! Mirrors the original tool's table — cell (row r, column c) shows
//! `set[c].events[r]` — with the cells rewritten by the last send
//! highlighted so the clock jump is visible.

use crate::ui::theme::Styles;
use lamport_core::{ProcessSet, EVENTS_PER_PROCESS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

/// Width of one grid column, enough for the largest reachable value.
const CELL_WIDTH: usize = 6;

/// Renders a [`ProcessSet`] as an N-column, 10-row timestamp table.
#[derive(Debug)]
pub struct ClockGrid<'a> {
    set: &'a ProcessSet,
    highlight: Option<(usize, usize)>,
    block: Option<Block<'a>>,
}

impl<'a> ClockGrid<'a> {
    /// Create a grid for the given set.
    pub fn new(set: &'a ProcessSet) -> Self {
        Self {
            set,
            highlight: None,
            block: None,
        }
    }

    /// Highlight the cells of `process` from `first_event` onward
    /// (the region the last send rewrote).
    #[must_use]
    pub fn highlight(mut self, highlight: Option<(usize, usize)>) -> Self {
        self.highlight = highlight;
        self
    }

    /// Set the surrounding block.
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn is_highlighted(&self, process: usize, event: usize) -> bool {
        self.highlight
            .is_some_and(|(p, first)| p == process && event >= first)
    }
}

impl Widget for ClockGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        if self.set.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                " No processes generated",
                Styles::dim(),
            )))
            .render(inner, buf);
            return;
        }

        let mut lines = Vec::with_capacity(EVENTS_PER_PROCESS + 1);

        // Header row: P0, P1, ...
        let header: Vec<Span<'_>> = (0..self.set.len())
            .map(|c| Span::styled(format!("{:>CELL_WIDTH$}", format!("P{c}")), Styles::title()))
            .collect();
        lines.push(Line::from(header));

        // One row per event index.
        for row in 0..EVENTS_PER_PROCESS {
            let cells: Vec<Span<'_>> = self
                .set
                .processes
                .iter()
                .enumerate()
                .map(|(col, process)| {
                    let style = if self.is_highlighted(col, row) {
                        Styles::success()
                    } else {
                        Styles::default()
                    };
                    Span::styled(format!("{:>CELL_WIDTH$}", process.events[row]), style)
                })
                .collect();
            lines.push(Line::from(cells));
        }

        Paragraph::new(lines).style(Styles::default()).render(inner, buf);
    }
}
