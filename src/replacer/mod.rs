//! Page replacement policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - evicts the longest-resident page
//! - [`LruReplacer`] - evicts the least recently referenced page
//! - [`OptReplacer`] - evicts the page whose next use is farthest away
//!
//! Every replacer sits behind the [`Replacer`] trait so the simulation
//! loop can swap policies at runtime via [`Policy::replacer`].

mod fifo;
mod lru;
mod opt;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::common::Error;
use crate::memory::FrameTable;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use opt::OptReplacer;

/// Victim selection for one simulation run.
///
/// The simulator owns the [`FrameTable`]; a replacer only keeps whatever
/// ordering it needs to pick the next victim.
pub trait Replacer<P> {
    /// Which policy this replacer implements.
    fn policy(&self) -> Policy;

    /// A page was loaded into a frame (fill or replacement).
    fn record_load(&mut self, page: P);

    /// A resident page was referenced again.
    fn record_hit(&mut self, page: P);

    /// Choose the page to evict and forget it.
    ///
    /// `future` holds the references after the one that faulted.
    /// Returns `None` only if the replacer tracks no resident page.
    fn victim(&mut self, frames: &FrameTable<P>, future: &[P]) -> Option<P>;
}

/// The replacement policies pagesim can simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Lru,
    Opt,
}

impl Policy {
    /// All policies, in report order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Opt];

    /// Create a fresh replacer for this policy.
    pub fn replacer<P>(self) -> Box<dyn Replacer<P>>
    where
        P: Copy + Eq + Hash + 'static,
    {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new()),
            Policy::Lru => Box::new(LruReplacer::new()),
            Policy::Opt => Box::new(OptReplacer::new()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Opt => "OPT",
        };
        f.write_str(name)
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "opt" | "optimal" => Ok(Policy::Opt),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
