// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! Every change to search state is recorded as `(slot, old_value)` before it
//! is made. Rewinding to a checkpoint replays the entries newest-first into a
//! [`TrailRestore`] target, restoring the state exactly as it was when the
//! checkpoint was taken.
//!
//! Checkpoints are plain trail lengths, so taking one is free and nested
//! checkpoints need no bookkeeping.

use crate::array::MAX_LENGTH;

/// State that can be restored from trail entries.
///
/// Slots are numbered by the implementor; the trail never interprets them.
pub trait TrailRestore {
    /// Put `old_value` back into `slot`.
    fn restore(&mut self, slot: usize, old_value: u64);
}

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    slot: usize,
    old_value: u64,
}

/// The trail of state changes since the start of the search.
#[derive(Debug)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Maximum number of live entries.
    ///
    /// Each array position records at most two changes (its symbol and the
    /// frontier), and everything below the current position is rewound before
    /// a position is refilled.
    pub const MAX_SIZE: usize = 2 * MAX_LENGTH;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::MAX_SIZE),
        }
    }

    /// The current position, to be passed to [`Trail::rewind_to`] later.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record that `slot` held `old_value` before being changed.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds `MAX_SIZE` (indicates a bug in the search algorithm).
    pub fn record_change(&mut self, slot: usize, old_value: u64) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Undo every change recorded after `checkpoint`, newest first.
    ///
    /// Rewinding to a checkpoint at or beyond the current length does nothing.
    pub fn rewind_to<R: TrailRestore + ?Sized>(&mut self, checkpoint: usize, target: &mut R) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                target.restore(entry.slot, entry.old_value);
            }
        }
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four restorable cells.
    #[derive(Debug, Default)]
    struct Cells([u64; 4]);

    impl Cells {
        fn set(&mut self, trail: &mut Trail, slot: usize, value: u64) {
            trail.record_change(slot, self.0[slot]);
            self.0[slot] = value;
        }
    }

    impl TrailRestore for Cells {
        fn restore(&mut self, slot: usize, old_value: u64) {
            self.0[slot] = old_value;
        }
    }

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_checkpoint_and_rewind() {
        let mut trail = Trail::new();
        let mut cells = Cells::default();

        cells.set(&mut trail, 0, 10);
        cells.set(&mut trail, 1, 20);
        let checkpoint = trail.checkpoint();
        assert_eq!(checkpoint, 2);

        cells.set(&mut trail, 2, 30);
        cells.set(&mut trail, 0, 40);
        assert_eq!(cells.0, [40, 20, 30, 0]);

        trail.rewind_to(checkpoint, &mut cells);
        assert_eq!(trail.len(), 2);
        assert_eq!(cells.0, [10, 20, 0, 0]);
    }

    #[test]
    fn test_rewind_restores_oldest_value() {
        let mut trail = Trail::new();
        let mut cells = Cells::default();

        let checkpoint = trail.checkpoint();
        cells.set(&mut trail, 3, 1);
        cells.set(&mut trail, 3, 2);
        cells.set(&mut trail, 3, 3);

        trail.rewind_to(checkpoint, &mut cells);
        assert_eq!(cells.0[3], 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut trail = Trail::new();
        let mut cells = Cells::default();

        cells.set(&mut trail, 0, 1);
        let outer = trail.checkpoint();
        cells.set(&mut trail, 1, 2);
        let inner = trail.checkpoint();
        cells.set(&mut trail, 2, 3);

        trail.rewind_to(inner, &mut cells);
        assert_eq!(cells.0, [1, 2, 0, 0]);

        trail.rewind_to(outer, &mut cells);
        assert_eq!(cells.0, [1, 0, 0, 0]);
    }

    #[test]
    fn test_rewind_past_end_is_noop() {
        let mut trail = Trail::new();
        let mut cells = Cells::default();
        cells.set(&mut trail, 0, 5);

        trail.rewind_to(10, &mut cells);
        assert_eq!(trail.len(), 1);
        assert_eq!(cells.0[0], 5);
    }

    #[test]
    #[should_panic(expected = "Trail overflow")]
    fn test_trail_overflow() {
        let mut trail = Trail::new();
        for i in 0..Trail::MAX_SIZE + 1 {
            trail.record_change(i, 0);
        }
    }
}
