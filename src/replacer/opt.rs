//! OPT (Belady's optimal) replacement policy.
//!
//! Clairvoyant: at each fault it looks at the rest of the reference
//! sequence and evicts the resident page that is needed last.
//!
//! Victim choice, scanning frames in slot order:
//! 1. the first page that is never referenced again, otherwise
//! 2. the page whose next reference is farthest away. Only a strictly
//!    farther page displaces the current choice, so the earliest slot
//!    wins a tie.
//!
//! # Performance
//! - `victim()`: O(F × R) where R is the length of the remaining sequence

use std::hash::Hash;

use log::trace;

use super::{Policy, Replacer};
use crate::memory::FrameTable;

/// Evicts the page whose next use lies farthest in the future.
///
/// Keeps no state between faults; everything is recomputed from the
/// frame table and the future references.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptReplacer;

impl OptReplacer {
    /// Create a new OPT replacer.
    pub fn new() -> Self {
        OptReplacer
    }
}

impl<P: Copy + Eq + Hash> Replacer<P> for OptReplacer {
    fn policy(&self) -> Policy {
        Policy::Opt
    }

    fn record_load(&mut self, _page: P) {}

    fn record_hit(&mut self, _page: P) {}

    fn victim(&mut self, frames: &FrameTable<P>, future: &[P]) -> Option<P> {
        let mut farthest: Option<(usize, P)> = None;

        for page in frames.iter() {
            match future.iter().position(|p| *p == page) {
                None => {
                    trace!("OPT: victim is never referenced again");
                    return Some(page);
                }
                Some(next) => match farthest {
                    Some((best, _)) if next <= best => {}
                    _ => farthest = Some((next, page)),
                },
            }
        }

        farthest.map(|(_, page)| page)
    }
}
