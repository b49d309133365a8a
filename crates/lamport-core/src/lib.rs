//! lamport-core: Headless engine for the Lamport logical clock simulator
//!
//! This crate provides the simulator's data model and algorithms:
//! - Process timelines and their generation
//! - The Lamport clock adjustment applied on simulated message sends
//! - Session persistence for the non-interactive CLI
//!
//! Everything here is pure data and algorithm; rendering and input
//! belong to the shells (`lamport-tui`, `lamport-cli`).

pub mod generate;
pub mod process;
pub mod send;
pub mod session;

// Re-export commonly used types
pub use generate::clamp_count;
pub use process::{
    Process, ProcessSet, SendRequest, EVENTS_PER_PROCESS, MAX_INCREMENT, MAX_PROCESSES,
    MIN_INCREMENT, MIN_PROCESSES,
};
pub use send::{SendError, SendOutcome};
pub use session::{Session, SessionError};

/// Returns the engine version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
