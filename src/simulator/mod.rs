//! Page replacement simulation.
//!
//! A simulation feeds a reference sequence through a fixed number of
//! frames and counts how often a page has to be loaded.
//!
//! # Components
//! - [`Simulator`] - Runs one policy over one sequence
//! - [`FillPhase`] - How references are counted before memory is full
//! - [`SimulationStats`] - Fault/hit/eviction counters of a run
//! - [`Comparison`] - All three policies on the same input
//!
//! The `simulate_*` functions are the short form: legacy fill, fault
//! count only.
//!
//! # Example
//! ```
//! use pagesim::{simulate_fifo, simulate_lru, simulate_opt};
//!
//! let refs = [1u32, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
//!
//! assert_eq!(simulate_fifo(3, &refs).unwrap(), 9);
//! assert_eq!(simulate_lru(3, &refs).unwrap(), 10);
//! assert_eq!(simulate_opt(3, &refs).unwrap(), 7);
//! ```

mod compare;
mod engine;
mod stats;

use std::hash::Hash;

use crate::common::Result;
use crate::replacer::Policy;

pub use compare::{belady_anomalies, compare, fault_curve, Comparison};
pub use engine::{FillPhase, Simulator};
pub use stats::SimulationStats;

/// Fault count of `policy` on `references` with `frame_count` frames.
///
/// # Errors
/// - `Error::InvalidFrameCount` if `frame_count` is 0
pub fn simulate<P>(policy: Policy, frame_count: usize, references: &[P]) -> Result<usize>
where
    P: Copy + Eq + Hash + 'static,
{
    let stats = Simulator::new(frame_count)?.run(policy, references);
    Ok(stats.fault_count())
}

/// Fault count under FIFO replacement.
pub fn simulate_fifo<P>(frame_count: usize, references: &[P]) -> Result<usize>
where
    P: Copy + Eq + Hash + 'static,
{
    simulate(Policy::Fifo, frame_count, references)
}

/// Fault count under LRU replacement.
pub fn simulate_lru<P>(frame_count: usize, references: &[P]) -> Result<usize>
where
    P: Copy + Eq + Hash + 'static,
{
    simulate(Policy::Lru, frame_count, references)
}

/// Fault count under OPT replacement.
///
/// Needs the whole sequence up front: every fault scans the references
/// that follow it.
pub fn simulate_opt<P>(frame_count: usize, references: &[P]) -> Result<usize>
where
    P: Copy + Eq + Hash + 'static,
{
    simulate(Policy::Opt, frame_count, references)
}
