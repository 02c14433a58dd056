//! FrameTable - the fixed set of frames a simulation runs against.
//!
//! A [`FrameTable`] holds the pages currently resident in memory:
//! - `slots`: resident pages in slot order, at most `capacity` of them
//! - `resident`: page -> number of slots holding it, for O(1) lookups

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::common::FrameId;

/// Fixed-capacity memory of page frames.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │                 FrameTable                  │
/// │  ┌──────────────┐  ┌─────────────────────┐  │
/// │  │  resident    │  │   slots: Vec<P>     │  │
/// │  │  P -> count  │  │  [F0] [F1] [F2] ... │  │
/// │  └──────────────┘  └─────────────────────┘  │
/// └─────────────────────────────────────────────┘
/// ```
///
/// Slots fill in order and are never vacated: a replacement reuses the
/// victim's slot. Slot order only matters as the iteration order handed
/// to replacers that need a deterministic tie-break.
///
/// A page normally occupies at most one slot. The legacy fill phase
/// admits without checking residency, so there the same page may sit in
/// several slots; `resident` counts them so lookups stay exact.
#[derive(Debug, Clone)]
pub struct FrameTable<P> {
    /// Resident pages, indexed by `FrameId`.
    slots: Vec<P>,

    /// How many slots each resident page occupies.
    resident: HashMap<P, usize>,

    /// Number of frames (immutable after construction).
    capacity: usize,
}

impl<P: Copy + Eq + Hash> FrameTable<P> {
    /// Create an empty frame table.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            slots: Vec::with_capacity(capacity),
            resident: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True once every frame is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Check whether `page` is resident.
    #[inline]
    pub fn contains(&self, page: &P) -> bool {
        self.resident.contains_key(page)
    }

    /// Load `page` into the next free frame.
    ///
    /// # Panics
    /// Panics if the table is full.
    pub fn admit(&mut self, page: P) -> FrameId {
        assert!(!self.is_full(), "admit called on a full frame table");

        self.slots.push(page);
        *self.resident.entry(page).or_insert(0) += 1;

        FrameId::new(self.slots.len() - 1)
    }

    /// Replace `victim` with `page`, reusing the victim's frame.
    ///
    /// If the victim occupies several frames, the first one is reused.
    /// Returns `None` (and changes nothing) if `victim` is not resident.
    pub fn replace(&mut self, victim: P, page: P) -> Option<FrameId> {
        let slot = self.slots.iter().position(|p| *p == victim)?;
        self.slots[slot] = page;

        if let Entry::Occupied(mut entry) = self.resident.entry(victim) {
            *entry.get_mut() -= 1;
            if *entry.get() == 0 {
                entry.remove();
            }
        }
        *self.resident.entry(page).or_insert(0) += 1;

        Some(FrameId::new(slot))
    }

    /// Resident pages in frame order.
    pub fn iter(&self) -> impl Iterator<Item = P> + '_ {
        self.slots.iter().copied()
    }
}
