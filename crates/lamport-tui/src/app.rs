//! Application state and update logic for the simulator TUI.

use crate::event::Action;
use crate::ui::widgets::NumberInputState;
use lamport_core::{
    clamp_count, ProcessSet, SendOutcome, SendRequest, EVENTS_PER_PROCESS, MAX_PROCESSES,
    MIN_PROCESSES,
};

/// How many ticks a notification stays on screen (~3s at 250ms ticks).
const NOTIFICATION_TICKS: usize = 12;

/// Process count the simulator starts with, matching the original tool.
const DEFAULT_COUNT: usize = 5;

/// The current screen being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Simulator,
    QuitConfirm,
}

/// The five numeric controls, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Count,
    Sender,
    SenderTime,
    Receiver,
    ReceiverTime,
}

impl Field {
    /// Focus order, wrapping.
    pub fn next(self) -> Self {
        match self {
            Self::Count => Self::Sender,
            Self::Sender => Self::SenderTime,
            Self::SenderTime => Self::Receiver,
            Self::Receiver => Self::ReceiverTime,
            Self::ReceiverTime => Self::Count,
        }
    }

    /// Reverse focus order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Self::Count => Self::ReceiverTime,
            Self::Sender => Self::Count,
            Self::SenderTime => Self::Sender,
            Self::Receiver => Self::SenderTime,
            Self::ReceiverTime => Self::Receiver,
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Current screen.
    pub screen: Screen,

    /// The process set being displayed.
    pub set: ProcessSet,

    /// Which control currently has focus.
    pub focus: Field,

    /// Process count control.
    pub count: NumberInputState,

    /// Sender process index control.
    pub sender: NumberInputState,

    /// Sender event index control.
    pub sender_time: NumberInputState,

    /// Receiver process index control.
    pub receiver: NumberInputState,

    /// Receiver event index control.
    pub receiver_time: NumberInputState,

    /// Cells rewritten by the last send: (process, first event index).
    pub last_adjustment: Option<(usize, usize)>,

    /// Notification message (displayed temporarily, cleared after some ticks).
    pub notification: Option<String>,

    /// Ticks remaining until notification is cleared.
    notification_ttl: usize,

    /// Tick counter.
    pub tick: usize,
}

impl App {
    /// Create a new app with a freshly generated set.
    pub fn new() -> Self {
        Self::from_set(ProcessSet::generate_with_entropy(DEFAULT_COUNT))
    }

    /// Create an app around an existing set (used by tests to stay
    /// deterministic).
    pub fn from_set(set: ProcessSet) -> Self {
        let count = set.len().max(MIN_PROCESSES);
        Self {
            should_quit: false,
            show_help: false,
            screen: Screen::Simulator,
            set,
            focus: Field::default(),
            count: NumberInputState::new(count, MIN_PROCESSES, MAX_PROCESSES),
            sender: NumberInputState::new(0, 0, MAX_PROCESSES - 1),
            sender_time: NumberInputState::new(0, 0, EVENTS_PER_PROCESS - 1),
            receiver: NumberInputState::new(0, 0, MAX_PROCESSES - 1),
            receiver_time: NumberInputState::new(0, 0, EVENTS_PER_PROCESS - 1),
            last_adjustment: None,
            notification: None,
            notification_ttl: 0,
            tick: 0,
        }
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        // An open help overlay swallows everything and closes.
        if self.show_help {
            if action != Action::None {
                self.show_help = false;
            }
            return;
        }

        match self.screen {
            Screen::QuitConfirm => match action {
                Action::Select | Action::Quit => self.should_quit = true,
                Action::Back => self.screen = Screen::Simulator,
                _ => {}
            },
            Screen::Simulator => self.handle_simulator_action(action),
        }
    }

    fn handle_simulator_action(&mut self, action: Action) {
        match action {
            Action::Quit | Action::Back => self.screen = Screen::QuitConfirm,
            Action::Help => self.show_help = true,
            Action::Generate => self.regenerate(),
            Action::Send | Action::Select => self.send_message(),
            Action::NextField => self.focus = self.focus.next(),
            Action::PrevField => self.focus = self.focus.prev(),
            Action::Increase => self.edit_focused(NumberInputState::increase),
            Action::Decrease => self.edit_focused(NumberInputState::decrease),
            Action::Digit(d) => self.edit_focused(|field| field.push_digit(d)),
            Action::Backspace => self.edit_focused(NumberInputState::backspace),
            Action::None => {}
        }
    }

    /// Advance the animation/TTL tick.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }

    /// Show a transient message on the status bar.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
        self.notification_ttl = NOTIFICATION_TICKS;
    }

    /// Replace the set with freshly generated timelines.
    pub fn regenerate(&mut self) {
        let count = clamp_count(self.count.value());
        self.set = ProcessSet::generate_with_entropy(count);
        self.last_adjustment = None;
        self.notify(format!("Generated {count} processes"));
    }

    /// Apply the send described by the current controls.
    pub fn send_message(&mut self) {
        let request = SendRequest {
            sender: self.sender.value(),
            sender_time: self.sender_time.value(),
            receiver: self.receiver.value(),
            receiver_time: self.receiver_time.value(),
        };

        match self.set.send(&request) {
            Ok(SendOutcome::Adjusted {
                first_event,
                new_base,
            }) => {
                self.last_adjustment = Some((request.receiver, first_event));
                self.notify(format!(
                    "P{} jumped to {new_base} at event {first_event}",
                    request.receiver
                ));
            }
            Ok(SendOutcome::AlreadyOrdered) => {
                self.last_adjustment = None;
                self.notify("Already ordered - no adjustment");
            }
            Err(e) => {
                self.last_adjustment = None;
                self.notify(format!("Invalid send: {e}"));
            }
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut NumberInputState)) {
        let field = match self.focus {
            Field::Count => &mut self.count,
            Field::Sender => &mut self.sender,
            Field::SenderTime => &mut self.sender_time,
            Field::Receiver => &mut self.receiver,
            Field::ReceiverTime => &mut self.receiver_time,
        };
        edit(field);

        // Changing the process count always regenerates the set.
        if self.focus == Field::Count && clamp_count(self.count.value()) != self.set.len() {
            self.regenerate();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
