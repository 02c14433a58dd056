//! Side-by-side policy comparison and fault curves.

use std::fmt;
use std::hash::Hash;
use std::ops::RangeInclusive;

use log::debug;

use crate::common::{Error, Result};
use crate::replacer::Policy;
use crate::simulator::{FillPhase, SimulationStats, Simulator};

/// Results of running every policy on the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub fifo: SimulationStats,
    pub lru: SimulationStats,
    pub opt: SimulationStats,
}

impl Comparison {
    /// Run FIFO, LRU and OPT with one simulator configuration.
    pub fn run<P>(sim: &Simulator, references: &[P]) -> Self
    where
        P: Copy + Eq + Hash + 'static,
    {
        Self {
            fifo: sim.run(Policy::Fifo, references),
            lru: sim.run(Policy::Lru, references),
            opt: sim.run(Policy::Opt, references),
        }
    }

    /// Counters for one policy.
    pub fn get(&self, policy: Policy) -> &SimulationStats {
        match policy {
            Policy::Fifo => &self.fifo,
            Policy::Lru => &self.lru,
            Policy::Opt => &self.opt,
        }
    }

    /// Counters in report order (FIFO, LRU, OPT).
    pub fn iter(&self) -> impl Iterator<Item = &SimulationStats> {
        [&self.fifo, &self.lru, &self.opt].into_iter()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stats in self.iter() {
            writeln!(f, "{}", stats)?;
        }
        Ok(())
    }
}

/// Run every policy on `references` with `frame_count` frames.
///
/// # Errors
/// - `Error::InvalidFrameCount` if `frame_count` is 0
pub fn compare<P>(frame_count: usize, references: &[P]) -> Result<Comparison>
where
    P: Copy + Eq + Hash + 'static,
{
    let sim = Simulator::new(frame_count)?;
    Ok(Comparison::run(&sim, references))
}

/// Fault count of `policy` for each frame count in `frames`.
///
/// Returns `(frame_count, faults)` pairs in increasing frame order.
///
/// With [`FillPhase::Legacy`] repeats during fill occupy extra frames, so
/// even LRU can fault more with more frames; use [`FillPhase::Checked`]
/// to study the policies themselves.
///
/// # Errors
/// - `Error::InvalidFrameCount` if the range starts at 0
pub fn fault_curve<P>(
    policy: Policy,
    references: &[P],
    frames: RangeInclusive<usize>,
    fill_phase: FillPhase,
) -> Result<Vec<(usize, usize)>>
where
    P: Copy + Eq + Hash + 'static,
{
    if *frames.start() == 0 && !frames.is_empty() {
        return Err(Error::InvalidFrameCount(0));
    }

    frames
        .map(|count| {
            let stats = Simulator::new(count)?
                .fill_phase(fill_phase)
                .run(policy, references);
            Ok((count, stats.fault_count()))
        })
        .collect()
}

/// Frame counts at which adding a frame increased the fault count.
///
/// FIFO is not a stack algorithm, so more memory can mean more faults
/// (Belady's anomaly). With checked fill, LRU and OPT curves never
/// produce an entry here.
pub fn belady_anomalies(curve: &[(usize, usize)]) -> Vec<usize> {
    let anomalies: Vec<usize> = curve
        .windows(2)
        .filter(|w| w[1].1 > w[0].1)
        .map(|w| w[1].0)
        .collect();

    if !anomalies.is_empty() {
        debug!("Belady's anomaly at frame counts {:?}", anomalies);
    }
    anomalies
}
