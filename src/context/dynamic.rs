// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.

use crate::trail::TrailRestore;

/// The partially filled array and its frontier.
///
/// Trail slots `0..length` are array positions; [`DynamicState::FRONTIER_SLOT`]
/// is the frontier.
#[derive(Debug, Clone)]
pub struct DynamicState {
    /// Symbols placed so far. Positions at or beyond the current search depth
    /// hold stale values.
    pub symbols: Vec<u8>,

    /// Number of distinct symbols among the filled positions, which is also
    /// the next symbol that may be introduced.
    pub frontier: usize,
}

impl DynamicState {
    /// Trail slot of the frontier. Array positions never reach it.
    pub const FRONTIER_SLOT: usize = usize::MAX;

    pub fn new(length: usize) -> Self {
        Self {
            symbols: vec![0; length],
            frontier: 0,
        }
    }
}

impl TrailRestore for DynamicState {
    fn restore(&mut self, slot: usize, old_value: u64) {
        if slot == Self::FRONTIER_SLOT {
            self.frontier = old_value as usize;
        } else {
            self.symbols[slot] = old_value as u8;
        }
    }
}
