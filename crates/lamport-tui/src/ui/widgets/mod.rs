//! Reusable widgets for the simulator TUI.

mod clock_grid;
mod number_input;
pub mod status_bar;

pub use clock_grid::ClockGrid;
pub use number_input::{NumberInput, NumberInputState};
pub use status_bar::{KeyHint, StatusBar};
