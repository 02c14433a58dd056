//! Configuration constants for pagesim.

use std::ops::RangeInclusive;

/// Smallest frame count the command-line driver accepts.
///
/// The simulators themselves only require at least one frame.
pub const MIN_FRAMES: usize = 1;

/// Largest frame count the command-line driver accepts.
///
/// With page numbers drawn from [`PAGE_ID_RANGE`] (ten distinct pages),
/// seven frames still leaves room for evictions to happen.
pub const MAX_FRAMES: usize = 7;

/// Page numbers produced by the random reference generator.
pub const PAGE_ID_RANGE: RangeInclusive<u32> = 0..=9;

/// Length of a random reference sequence when no page count is given.
pub const RANDOM_LEN_RANGE: RangeInclusive<usize> = 10..=100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_bounds() {
        assert!(MIN_FRAMES >= 1);
        assert!(MIN_FRAMES <= MAX_FRAMES);
    }

    #[test]
    fn test_max_frames_below_page_domain() {
        // Otherwise every random sequence would fit without evicting.
        let distinct = (PAGE_ID_RANGE.end() - PAGE_ID_RANGE.start() + 1) as usize;
        assert!(MAX_FRAMES < distinct);
    }
}
