//! Simulation statistics.

use std::fmt;

use crate::replacer::Policy;

/// Counters produced by one simulation run.
///
/// Every reference is either a fault or a hit, so
/// `faults + hits == references`. An eviction only happens on a fault
/// once all frames are occupied, so `evictions <= faults`.
///
/// # Example
/// ```
/// use pagesim::{Policy, Simulator};
///
/// let sim = Simulator::new(3).unwrap();
/// let stats = sim.run(Policy::Fifo, &[1u32, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
///
/// assert_eq!(stats.faults, 9);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationStats {
    /// Policy that produced these counts.
    pub policy: Policy,

    /// Number of frames simulated.
    pub frames: usize,

    /// Length of the reference sequence.
    pub references: u64,

    /// References that loaded a page into a frame.
    pub faults: u64,

    /// References served by a resident page.
    pub hits: u64,

    /// Faults that had to throw out a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create zeroed counters for a run.
    pub fn new(policy: Policy, frames: usize) -> Self {
        Self {
            policy,
            frames,
            references: 0,
            faults: 0,
            hits: 0,
            evictions: 0,
        }
    }

    /// Calculate fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }

    /// Fault count as the `usize` returned by the `simulate_*` functions.
    pub fn fault_count(&self) -> usize {
        self.faults as usize
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} faults, {} hits, {} evictions ({:.2}% fault rate)",
            self.policy,
            self.faults,
            self.hits,
            self.evictions,
            self.fault_rate() * 100.0
        )
    }
}
