//! Process timelines for the Lamport clock simulator.
//!
//! A [`Process`] is one simulated participant: a fixed per-event
//! increment and the sequence of logical-clock values it produces.
//! A [`ProcessSet`] is the ordered collection the rest of the system
//! operates on.

use serde::{Deserialize, Serialize};

/// Number of local events each process advances through.
pub const EVENTS_PER_PROCESS: usize = 10;

/// Minimum number of processes in a set.
pub const MIN_PROCESSES: usize = 1;

/// Maximum number of processes in a set.
pub const MAX_PROCESSES: usize = 10;

/// Smallest per-event increment a process may be created with.
pub const MIN_INCREMENT: u64 = 1;

/// Largest per-event increment a process may be created with.
pub const MAX_INCREMENT: u64 = 9;

/// A single simulated process and its logical-clock timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Fixed step between consecutive events, chosen at creation.
    pub increment: u64,

    /// Logical-clock values for events `0..EVENTS_PER_PROCESS`.
    pub events: Vec<u64>,
}

impl Process {
    /// Create a process whose timeline is `events[i] = i * increment`.
    pub fn with_increment(increment: u64) -> Self {
        let events = (0..EVENTS_PER_PROCESS as u64).map(|i| i * increment).collect();
        Self { increment, events }
    }

    /// The step between consecutive events, recovered from the timeline
    /// itself rather than the stored `increment` field. Adjustment
    /// preserves spacing, so the two always agree after creation. Falls
    /// back to the stored field when the timeline is too short to read
    /// a spacing from.
    pub fn step(&self) -> u64 {
        match self.events.as_slice() {
            [first, second, ..] => second - first,
            _ => self.increment,
        }
    }

    /// Whether the timeline has the expected shape: exactly
    /// [`EVENTS_PER_PROCESS`] events, non-decreasing.
    pub fn is_well_formed(&self) -> bool {
        self.events.len() == EVENTS_PER_PROCESS && self.events.windows(2).all(|w| w[0] <= w[1])
    }
}

/// An ordered set of processes, indexed `0..len`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSet {
    /// The processes, in display/index order.
    pub processes: Vec<Process>,
}

impl ProcessSet {
    /// Number of processes in the set.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set contains no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Borrow the process at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Whether every process timeline has the expected shape.
    pub fn is_well_formed(&self) -> bool {
        self.processes.iter().all(Process::is_well_formed)
    }
}

/// A transient request to simulate a message send between two events.
///
/// Never persisted; built by the shell from its numeric inputs and
/// consumed by [`ProcessSet::send`](crate::send).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendRequest {
    /// Index of the sending process.
    pub sender: usize,
    /// Event index on the sender's timeline the message departs from.
    pub sender_time: usize,
    /// Index of the receiving process.
    pub receiver: usize,
    /// Event index on the receiver's timeline the message arrives at.
    pub receiver_time: usize,
}
