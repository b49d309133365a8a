//! Timeline generation.
//!
//! Each generation call produces an entirely new [`ProcessSet`]: one
//! process per requested slot, each with an increment drawn uniformly
//! from `1..=9` and a timeline of `events[i] = i * increment`. The
//! random source is injected so tests can seed it.

use crate::process::{
    Process, ProcessSet, MAX_INCREMENT, MAX_PROCESSES, MIN_INCREMENT, MIN_PROCESSES,
};
use rand::Rng;

impl ProcessSet {
    /// Generate a fresh set of `count` independent processes.
    ///
    /// Callers are responsible for clamping `count` (see
    /// [`clamp_count`]); the generator itself accepts any count and
    /// cannot fail. Repeated calls with the same `rng` state yield the
    /// same set, which is what deterministic tests and `--seed` rely on.
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let processes = (0..count)
            .map(|_| Process::with_increment(rng.gen_range(MIN_INCREMENT..=MAX_INCREMENT)))
            .collect();
        Self { processes }
    }

    /// Generate from OS entropy, for interactive callers.
    pub fn generate_with_entropy(count: usize) -> Self {
        Self::generate(count, &mut rand::thread_rng())
    }
}

/// Clamp a requested process count into the supported `[1, 10]` range.
pub fn clamp_count(count: usize) -> usize {
    count.clamp(MIN_PROCESSES, MAX_PROCESSES)
}
