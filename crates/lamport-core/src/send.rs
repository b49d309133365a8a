//! Simulated message sends and the Lamport clock adjustment.
//!
//! A send compares the sender's timestamp at the departure event with
//! the receiver's timestamp at the arrival event. If the message comes
//! from the receiver's "future", every receiver event from the arrival
//! onward is rebased past the sender's value, keeping the receiver's
//! own even spacing.

use crate::process::{ProcessSet, SendRequest};
use tracing::{debug, trace};

/// What a valid send did to the receiver's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The receiver's clock was behind the message. Its events from
    /// `first_event` onward were rewritten starting at `new_base`.
    Adjusted {
        /// First event index that was rewritten (the arrival event).
        first_event: usize,
        /// New timestamp of the arrival event (`sender_value + 1`).
        new_base: u64,
    },
    /// The message timestamp did not exceed the receiver's clock at the
    /// arrival event; nothing was changed.
    ///
    /// Equal timestamps land here too. The textbook Lamport rule would
    /// still advance the receiver past the maximum on equality; this
    /// simulator deliberately simplifies equality to "already ordered".
    AlreadyOrdered,
}

/// Why a send request was rejected. The set is never mutated on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// Sender and receiver are the same process.
    #[error("sender and receiver are both P{index}")]
    SameProcess {
        /// The duplicated process index.
        index: usize,
    },

    /// The sender index does not name a process in the set.
    #[error("sender process P{index} does not exist")]
    SenderOutOfRange {
        /// The offending process index.
        index: usize,
    },

    /// The sender's event index is past the end of its timeline.
    #[error("sender time {time} is out of range")]
    SenderTimeOutOfRange {
        /// The offending event index.
        time: usize,
    },

    /// The receiver index does not name a process in the set.
    #[error("receiver process P{index} does not exist")]
    ReceiverOutOfRange {
        /// The offending process index.
        index: usize,
    },

    /// The receiver's event index is past the end of its timeline.
    #[error("receiver time {time} is out of range")]
    ReceiverTimeOutOfRange {
        /// The offending event index.
        time: usize,
    },
}

impl ProcessSet {
    /// Simulate delivering a message and adjust the receiver's clock.
    ///
    /// On `Err` the set is untouched; callers decide whether to surface
    /// the rejection or quietly ignore it.
    pub fn send(&mut self, request: &SendRequest) -> Result<SendOutcome, SendError> {
        let SendRequest {
            sender,
            sender_time,
            receiver,
            receiver_time,
        } = *request;

        if sender == receiver {
            return Err(SendError::SameProcess { index: sender });
        }
        let sender_value = *self
            .processes
            .get(sender)
            .ok_or(SendError::SenderOutOfRange { index: sender })?
            .events
            .get(sender_time)
            .ok_or(SendError::SenderTimeOutOfRange { time: sender_time })?;
        let receiver_process = self
            .processes
            .get_mut(receiver)
            .ok_or(SendError::ReceiverOutOfRange { index: receiver })?;
        let receiver_value = *receiver_process.events.get(receiver_time).ok_or(
            SendError::ReceiverTimeOutOfRange {
                time: receiver_time,
            },
        )?;

        if sender_value <= receiver_value {
            trace!(sender_value, receiver_value, "message already ordered, no adjustment");
            return Ok(SendOutcome::AlreadyOrdered);
        }

        // Receiver clock must jump past the message timestamp. Rebase the
        // arrival event to sender_value + 1 and keep the receiver's own
        // spacing for everything after it.
        let step = receiver_process.step();
        let new_base = sender_value + 1;
        let mut value = new_base;
        for event in &mut receiver_process.events[receiver_time..] {
            *event = value;
            value += step;
        }

        debug!(
            sender,
            receiver,
            sender_value,
            receiver_value,
            new_base,
            "adjusted receiver timeline from event {receiver_time}"
        );
        Ok(SendOutcome::Adjusted {
            first_event: receiver_time,
            new_base,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Process;

    /// Two-process set with known increments, as a little fixture.
    fn two_processes(first: u64, second: u64) -> ProcessSet {
        ProcessSet {
            processes: vec![Process::with_increment(first), Process::with_increment(second)],
        }
    }

    fn request(sender: usize, sender_time: usize, receiver: usize, receiver_time: usize) -> SendRequest {
        SendRequest {
            sender,
            sender_time,
            receiver,
            receiver_time,
        }
    }

    #[test]
    fn test_same_process_rejected_without_mutation() {
        let mut set = two_processes(1, 5);
        let before = set.clone();
        let result = set.send(&request(0, 2, 0, 4));
        assert_eq!(result, Err(SendError::SameProcess { index: 0 }));
        assert_eq!(set, before);
    }

    #[test]
    fn test_out_of_range_time_rejected_without_mutation() {
        let mut set = two_processes(1, 5);
        let before = set.clone();

        let result = set.send(&request(0, 15, 1, 0));
        assert_eq!(result, Err(SendError::SenderTimeOutOfRange { time: 15 }));
        assert_eq!(set, before);

        let result = set.send(&request(0, 0, 1, 10));
        assert_eq!(result, Err(SendError::ReceiverTimeOutOfRange { time: 10 }));
        assert_eq!(set, before);
    }

    #[test]
    fn test_out_of_range_process_rejected() {
        let mut set = two_processes(1, 5);
        assert_eq!(
            set.send(&request(2, 0, 1, 0)),
            Err(SendError::SenderOutOfRange { index: 2 })
        );
        assert_eq!(
            set.send(&request(0, 0, 7, 0)),
            Err(SendError::ReceiverOutOfRange { index: 7 })
        );
    }

    #[test]
    fn test_message_from_the_past_is_already_ordered() {
        // P1's event 0 has value 0, P0's event 5 has value 5: 0 <= 5.
        let mut set = two_processes(1, 5);
        let before = set.clone();
        let outcome = set.send(&request(1, 0, 0, 5)).unwrap();
        assert_eq!(outcome, SendOutcome::AlreadyOrdered);
        assert_eq!(set, before);
    }

    #[test]
    fn test_equal_timestamps_are_already_ordered() {
        // P0 event 5 and P1 event 1 are both 5; the textbook rule would
        // bump the receiver, this simulator does not.
        let mut set = two_processes(1, 5);
        let before = set.clone();
        let outcome = set.send(&request(0, 5, 1, 1)).unwrap();
        assert_eq!(outcome, SendOutcome::AlreadyOrdered);
        assert_eq!(set, before);
    }

    #[test]
    fn test_adjustment_rebases_receiver_timeline() {
        // sender_value = 8, receiver_value = 6, receiver step = 2:
        // events 3.. become 9, 11, 13, ... while 0..3 stay put.
        let mut set = two_processes(1, 2);
        let outcome = set.send(&request(0, 8, 1, 3)).unwrap();
        assert_eq!(
            outcome,
            SendOutcome::Adjusted {
                first_event: 3,
                new_base: 9
            }
        );
        assert_eq!(set.processes[1].events, vec![0, 2, 4, 9, 11, 13, 15, 17, 19, 21]);
        assert!(set.is_well_formed());
    }

    #[test]
    fn test_adjustment_leaves_other_processes_untouched() {
        let mut set = ProcessSet {
            processes: vec![
                Process::with_increment(1),
                Process::with_increment(2),
                Process::with_increment(9),
            ],
        };
        let sender_before = set.processes[0].clone();
        let bystander_before = set.processes[2].clone();

        set.send(&request(0, 8, 1, 3)).unwrap();
        assert_eq!(set.processes[0], sender_before);
        assert_eq!(set.processes[2], bystander_before);
    }

    #[test]
    fn test_repeated_send_recomputes_from_adjusted_state() {
        let mut set = two_processes(1, 2);
        set.send(&request(0, 8, 1, 3)).unwrap();
        let after_first = set.clone();

        // After adjustment the receiver's event 3 is 9, the sender's
        // event 8 is still 8, so the gap is closed and the second
        // identical send is a no-op.
        let outcome = set.send(&request(0, 8, 1, 3)).unwrap();
        assert_eq!(outcome, SendOutcome::AlreadyOrdered);
        assert_eq!(set, after_first);
    }

    #[test]
    fn test_adjustment_from_event_zero_overwrites_whole_timeline() {
        let mut set = two_processes(9, 1);
        // sender_value = set[0].events[9] = 81, receiver_value = 0.
        let outcome = set.send(&request(0, 9, 1, 0)).unwrap();
        assert_eq!(
            outcome,
            SendOutcome::Adjusted {
                first_event: 0,
                new_base: 82
            }
        );
        assert_eq!(set.processes[1].events, (82..92).collect::<Vec<u64>>());
    }
}
