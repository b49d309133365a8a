//! Simulator screen - the controls row above the timeline grid.

use crate::app::{App, Field};
use crate::screens::Screen;
use crate::ui::widgets::{ClockGrid, KeyHint, NumberInput, StatusBar};
use crate::ui::{main_layout, simulator_layout};
use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Widget},
};

/// The main simulator screen.
pub struct SimulatorScreen;

impl Screen for SimulatorScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (main_area, status_area) = main_layout(area);
        let (controls_area, grid_area) = simulator_layout(main_area);

        render_controls(app, controls_area, buf);
        render_grid(app, grid_area, buf);

        const HINTS: [KeyHint; 6] = [
            KeyHint::new("Tab", "Field"),
            KeyHint::new("↑/↓", "Adjust"),
            KeyHint::new("g", "Generate"),
            KeyHint::new("Enter", "Send"),
            KeyHint::new("?", "Help"),
            KeyHint::new("q", "Quit"),
        ];

        StatusBar::new("Simulator", &HINTS)
            .notification(app.notification.as_deref())
            .render(status_area, buf);
    }
}

fn render_controls(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
        ])
        .split(area);

    let fields = [
        (Field::Count, &app.count, "Processes"),
        (Field::Sender, &app.sender, "Sender"),
        (Field::SenderTime, &app.sender_time, "Send @"),
        (Field::Receiver, &app.receiver, "Receiver"),
        (Field::ReceiverTime, &app.receiver_time, "Recv @"),
    ];

    for (chunk, (field, state, label)) in chunks.iter().zip(fields) {
        NumberInput::new(state, label)
            .focused(app.focus == field)
            .render(*chunk, buf);
    }
}

fn render_grid(app: &App, area: Rect, buf: &mut Buffer) {
    let title = format!(" Timelines ({} processes) ", app.set.len());
    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .style(Styles::default());

    ClockGrid::new(&app.set)
        .highlight(app.last_adjustment)
        .block(block)
        .render(area, buf);
}
