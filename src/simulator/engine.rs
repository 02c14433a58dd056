//! Simulator - runs a reference sequence through one replacement policy.

use std::hash::Hash;

use log::{debug, trace};

use crate::common::{Error, Result};
use crate::memory::FrameTable;
use crate::replacer::Policy;
use crate::simulator::SimulationStats;

/// How references are counted while frames are still free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillPhase {
    /// Every reference made before the frames fill up is a fault and
    /// takes a frame, even if the page is already resident.
    ///
    /// Repeating a page during fill therefore inflates the fault count
    /// and lets the same page occupy several frames. This is the
    /// behaviour the classic textbook driver has, kept for parity.
    #[default]
    Legacy,

    /// Fill-phase references to resident pages are hits, as they are
    /// once memory is full. LRU refreshes recency on such hits.
    Checked,
}

/// Page replacement simulator for a fixed number of frames.
///
/// A `Simulator` holds only configuration. Each call to [`run`] builds
/// its own frame table and replacer and drops them on return, so runs
/// are independent and repeatable.
///
/// # Usage
/// ```
/// use pagesim::{FillPhase, Policy, Simulator};
///
/// let refs = [1u32, 1, 2];
///
/// let legacy = Simulator::new(2).unwrap();
/// assert_eq!(legacy.run(Policy::Lru, &refs).faults, 3);
///
/// let checked = Simulator::new(2).unwrap().fill_phase(FillPhase::Checked);
/// assert_eq!(checked.run(Policy::Lru, &refs).faults, 2);
/// assert_eq!(checked.run(Policy::Lru, &refs).hits, 1);
/// ```
///
/// [`run`]: Simulator::run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    frame_count: usize,
    fill_phase: FillPhase,
}

impl Simulator {
    /// Create a simulator with `frame_count` frames and legacy fill.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCount` if `frame_count` is 0
    pub fn new(frame_count: usize) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::InvalidFrameCount(frame_count));
        }

        Ok(Self {
            frame_count,
            fill_phase: FillPhase::default(),
        })
    }

    /// Choose how fill-phase references are counted.
    pub fn fill_phase(mut self, fill_phase: FillPhase) -> Self {
        self.fill_phase = fill_phase;
        self
    }

    /// Run `references` through `policy` and return its counters.
    pub fn run<P>(&self, policy: Policy, references: &[P]) -> SimulationStats
    where
        P: Copy + Eq + Hash + 'static,
    {
        let mut frames = FrameTable::new(self.frame_count);
        let mut replacer = policy.replacer::<P>();
        let mut stats = SimulationStats::new(policy, self.frame_count);

        debug!(
            "{}: simulating {} references with {} frames ({:?} fill)",
            policy,
            references.len(),
            self.frame_count,
            self.fill_phase
        );

        for (i, &page) in references.iter().enumerate() {
            stats.references += 1;

            if !frames.is_full() {
                if self.fill_phase == FillPhase::Checked && frames.contains(&page) {
                    replacer.record_hit(page);
                    stats.hits += 1;
                } else {
                    frames.admit(page);
                    replacer.record_load(page);
                    stats.faults += 1;
                }
                continue;
            }

            if frames.contains(&page) {
                replacer.record_hit(page);
                stats.hits += 1;
                continue;
            }

            // The replacer holds exactly the pages in `frames`, one entry per
            // occupied slot, so a full table always yields a resident victim.
            let replaced = replacer
                .victim(&frames, &references[i + 1..])
                .and_then(|victim| frames.replace(victim, page));
            let Some(frame_id) = replaced else {
                debug_assert!(replaced.is_some(), "replacer out of sync with frames");
                debug!("{}: no victim for reference {}, skipped", policy, i);
                continue;
            };
            replacer.record_load(page);

            stats.faults += 1;
            stats.evictions += 1;

            trace!("{}: reference {} evicted from {}", policy, i, frame_id);
        }

        debug!("{}", stats);
        stats
    }
}
