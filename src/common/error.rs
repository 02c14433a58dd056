//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The simulators themselves can only fail on a bad frame count. The
/// remaining variants come from building inputs for them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A simulation was requested with zero frames.
    #[error("Invalid frame count: {0} (at least one frame is required)")]
    InvalidFrameCount(usize),

    /// The driver only accepts frame counts within a fixed range.
    #[error("Frame count {count} out of range, expected {min} to {max}")]
    FrameCountOutOfRange { count: usize, min: usize, max: usize },

    /// A token in a textual reference sequence is not a page number.
    #[error("Invalid page reference: {0:?}")]
    InvalidReference(String),

    /// A policy name that is not one of fifo, lru or opt.
    #[error("Unknown replacement policy: {0:?}")]
    UnknownPolicy(String),
}
