//! Simulated physical memory.
//!
//! # Components
//! - [`FrameTable`] - Fixed set of frames and the pages resident in them

mod frame_table;

pub use frame_table::FrameTable;
