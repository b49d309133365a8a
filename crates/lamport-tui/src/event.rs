//! Event handling for the simulator TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::sync::mpsc;
use std::time::Duration;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A tick event for UI updates.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that polls crossterm on a background thread.
///
/// The simulator is fully synchronous, so a plain std channel is enough;
/// each user action runs to completion before the next is read.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();

        // Crossterm polling is blocking I/O, so it lives on its own thread.
        std::thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) => Some(Event::Key(key)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(e) = event {
                            if tx.send(e).is_err() {
                                break;
                            }
                        }
                    }
                } else {
                    // No event, send tick
                    if tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx }
    }

    /// Get the next event, blocking until one is available.
    pub fn next(&self) -> Option<Event> {
        self.rx.recv().ok()
    }
}

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    Back,
    Select,
    Generate,
    Send,
    NextField,
    PrevField,
    Increase,
    Decrease,
    Digit(u8),
    Backspace,
    None,
}

/// Convert a key event to an action.
#[allow(clippy::cast_possible_truncation)]
pub fn key_to_action(key: KeyEvent) -> Action {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('s') => Action::Send,
        KeyCode::Char(c @ '0'..='9') => Action::Digit(c as u8 - b'0'),
        KeyCode::Esc => Action::Back,
        KeyCode::Enter => Action::Select,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Up | KeyCode::Char('k') => Action::Increase,
        KeyCode::Down | KeyCode::Char('j') => Action::Decrease,
        KeyCode::Left | KeyCode::Char('h') => Action::PrevField,
        KeyCode::Right | KeyCode::Char('l') => Action::NextField,
        KeyCode::BackTab => Action::PrevField,
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                Action::PrevField
            } else {
                Action::NextField
            }
        }
        _ => Action::None,
    }
}
