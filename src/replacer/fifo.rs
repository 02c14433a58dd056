//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use super::{Policy, Replacer};
use crate::memory::FrameTable;

/// Evicts pages in the order they were loaded.
///
/// Hits never reorder the queue: a page's position is fixed from the
/// moment it is loaded until it is evicted.
#[derive(Debug, Clone)]
pub struct FifoReplacer<P> {
    /// Loaded pages in arrival order (front = oldest).
    queue: VecDeque<P>,
}

impl<P> FifoReplacer<P> {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Number of tracked pages.
    pub fn size(&self) -> usize {
        self.queue.len()
    }
}

impl<P> Default for FifoReplacer<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy> Replacer<P> for FifoReplacer<P> {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn record_load(&mut self, page: P) {
        self.queue.push_back(page);
    }

    fn record_hit(&mut self, _page: P) {}

    fn victim(&mut self, _frames: &FrameTable<P>, _future: &[P]) -> Option<P> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table(pages: &[u32]) -> FrameTable<u32> {
        let mut table = FrameTable::new(pages.len());
        for &p in pages {
            table.admit(p);
        }
        table
    }

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new();
        let table = full_table(&[0, 1, 2]);

        replacer.record_load(0);
        replacer.record_load(1);
        replacer.record_load(2);
        assert_eq!(replacer.size(), 3);

        // Should evict in FIFO order
        assert_eq!(replacer.victim(&table, &[]), Some(0));
        assert_eq!(replacer.victim(&table, &[]), Some(1));
        assert_eq!(replacer.victim(&table, &[]), Some(2));
        assert_eq!(replacer.victim(&table, &[]), None);
    }

    #[test]
    fn test_fifo_hit_no_reorder() {
        let mut replacer = FifoReplacer::new();
        let table = full_table(&[0, 1]);

        replacer.record_load(0);
        replacer.record_load(1);
        replacer.record_hit(0); // Hit - should NOT reorder

        assert_eq!(replacer.victim(&table, &[]), Some(0));
        assert_eq!(replacer.victim(&table, &[]), Some(1));
    }

    #[test]
    fn test_fifo_ignores_future() {
        let mut replacer = FifoReplacer::new();
        let table = full_table(&[3, 4]);

        replacer.record_load(3);
        replacer.record_load(4);

        // 3 is needed next, FIFO evicts it anyway.
        assert_eq!(replacer.victim(&table, &[3, 3, 3]), Some(3));
    }

    #[test]
    fn test_fifo_reload_goes_to_back() {
        let mut replacer = FifoReplacer::new();
        let table = full_table(&[1, 2]);

        replacer.record_load(1);
        replacer.record_load(2);
        assert_eq!(replacer.victim(&table, &[]), Some(1));
        replacer.record_load(1);

        assert_eq!(replacer.victim(&table, &[]), Some(2));
        assert_eq!(replacer.victim(&table, &[]), Some(1));
    }
}
