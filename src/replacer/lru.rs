//! LRU (Least-Recently-Used) replacement policy.
//!
//! Keeps a recency list with the most recently used page at the front.
//! Every load or hit moves the page to the front; the victim is taken
//! from the back.
//!
//! # Performance
//! - `record_load()`: O(1)
//! - `record_hit()`: O(F) where F is the number of frames
//! - `victim()`: O(1)

use std::collections::VecDeque;

use super::{Policy, Replacer};
use crate::memory::FrameTable;

/// Evicts the page that has gone unreferenced the longest.
#[derive(Debug, Clone)]
pub struct LruReplacer<P> {
    /// Front = most recently used, back = least recently used.
    recency: VecDeque<P>,
}

impl<P> LruReplacer<P> {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self {
            recency: VecDeque::new(),
        }
    }

    /// Number of tracked pages.
    pub fn size(&self) -> usize {
        self.recency.len()
    }
}

impl<P> Default for LruReplacer<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy + PartialEq> Replacer<P> for LruReplacer<P> {
    fn policy(&self) -> Policy {
        Policy::Lru
    }

    fn record_load(&mut self, page: P) {
        self.recency.push_front(page);
    }

    fn record_hit(&mut self, page: P) {
        if let Some(pos) = self.recency.iter().position(|p| *p == page) {
            self.recency.remove(pos);
        }
        self.recency.push_front(page);
    }

    fn victim(&mut self, _frames: &FrameTable<P>, _future: &[P]) -> Option<P> {
        self.recency.pop_back()
    }
}
