//! pagesim - page replacement simulator comparing FIFO, LRU and OPT.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Workload (workload.rs)  [Input only]         │   │
//! │  │        parse_references  |  ReferenceGenerator          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Simulator (simulator/)                    │   │
//! │  │   Simulator + FillPhase + SimulationStats + Comparison   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Replacers (replacer/)  [Runtime Swappable]       │   │
//! │  │                 FIFO  |  LRU  |  OPT                     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Memory (memory/)                        │   │
//! │  │          FrameTable: slots + residency index             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`memory`] - The frame table every simulation runs against
//! - [`replacer`] - Replacement policy implementations
//! - [`simulator`] - Simulation loop, statistics and comparisons
//! - [`workload`] - Parsed and randomly generated reference sequences
//!
//! # Quick Start
//! ```
//! use pagesim::{compare, parse_references};
//!
//! let refs = parse_references("1 2 3 4 1 2 5 1 2 3 4 5").unwrap();
//! let report = compare(3, &refs).unwrap();
//!
//! assert_eq!(report.fifo.faults, 9);
//! assert_eq!(report.lru.faults, 10);
//! assert_eq!(report.opt.faults, 7);
//! ```

pub mod common;
pub mod memory;
pub mod replacer;
pub mod simulator;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result};

pub use memory::FrameTable;
pub use replacer::{FifoReplacer, LruReplacer, OptReplacer, Policy, Replacer};
pub use simulator::{
    belady_anomalies, compare, fault_curve, simulate, simulate_fifo, simulate_lru, simulate_opt,
    Comparison, FillPhase, SimulationStats, Simulator,
};
pub use workload::{parse_references, ReferenceGenerator};
