// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for one enumeration run.
//!
//! The SearchContext owns everything the predicates read and write: the
//! validated parameters, the partially filled array with its frontier, the
//! trail that undoes changes on backtracking, and the run statistics.
//!
//! All trailed state is changed through methods on the context, which record
//! the old value before writing the new one.
//!
//! # Example
//!
//! ```
//! use distinct_arrays::array::ArrayParams;
//! use distinct_arrays::context::SearchContext;
//!
//! let mut ctx = SearchContext::new(ArrayParams::new(3, 2).unwrap());
//! let checkpoint = ctx.trail.checkpoint();
//! ctx.place_symbol(0, 0);
//! assert_eq!(ctx.frontier(), 1);
//!
//! ctx.rewind_to(checkpoint);
//! assert_eq!(ctx.frontier(), 0);
//! ```

pub mod dynamic;

pub use dynamic::DynamicState;

use crate::array::{ArrayParams, NormalizedArray};
use crate::state::Statistics;
use crate::trail::Trail;

/// Search context combining parameters, trailed state and statistics.
#[derive(Debug)]
pub struct SearchContext {
    params: ArrayParams,
    /// Trail for O(1) backtracking
    pub trail: Trail,
    /// Mutable search state
    pub state: DynamicState,
    /// Counters for this run (not trailed)
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a fresh context with an empty array.
    pub fn new(params: ArrayParams) -> Self {
        Self {
            params,
            trail: Trail::new(),
            state: DynamicState::new(params.length()),
            statistics: Statistics::new(),
        }
    }

    pub fn params(&self) -> ArrayParams {
        self.params
    }

    /// The array as currently filled.
    pub fn symbols(&self) -> &[u8] {
        &self.state.symbols
    }

    /// Number of distinct symbols placed so far.
    pub fn frontier(&self) -> usize {
        self.state.frontier
    }

    /// Place `symbol` at `position` (trail-tracked).
    ///
    /// Choosing the frontier value introduces a new symbol and advances the
    /// frontier.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds or `symbol` exceeds the frontier,
    /// which would break the restricted-growth property.
    pub fn place_symbol(&mut self, position: usize, symbol: usize) {
        assert!(
            position < self.params.length(),
            "Position out of bounds: {}",
            position
        );
        assert!(
            symbol <= self.state.frontier && symbol < self.params.sigma(),
            "Symbol {} not available at frontier {}",
            symbol,
            self.state.frontier
        );

        self.trail
            .record_change(position, self.state.symbols[position] as u64);
        self.state.symbols[position] = symbol as u8;

        if symbol == self.state.frontier {
            self.trail
                .record_change(DynamicState::FRONTIER_SLOT, self.state.frontier as u64);
            self.state.frontier += 1;
        }

        debug_assert_eq!(
            self.state.frontier,
            distinct_in_prefix(&self.state.symbols[..=position]),
            "frontier out of step after filling position {}",
            position
        );
    }

    /// Undo every change made since `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.state);
    }

    /// Snapshot of the array once all positions are filled.
    pub fn current_array(&self) -> NormalizedArray {
        NormalizedArray::from_enumeration(self.state.symbols.clone())
    }
}

/// Distinct symbols in a restricted-growth prefix (its maximum plus one).
pub(crate) fn distinct_in_prefix(prefix: &[u8]) -> usize {
    prefix.iter().max().map_or(0, |&max| max as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(length: usize, sigma: usize) -> SearchContext {
        SearchContext::new(ArrayParams::new(length, sigma).unwrap())
    }

    #[test]
    fn test_search_context_new() {
        let ctx = context(4, 2);
        assert!(ctx.trail.is_empty());
        assert_eq!(ctx.symbols(), &[0, 0, 0, 0]);
        assert_eq!(ctx.frontier(), 0);
    }

    #[test]
    fn test_place_symbol_advances_frontier() {
        let mut ctx = context(4, 3);
        ctx.place_symbol(0, 0);
        assert_eq!(ctx.frontier(), 1);
        assert_eq!(ctx.trail.len(), 2);

        ctx.place_symbol(1, 0);
        assert_eq!(ctx.frontier(), 1);
        assert_eq!(ctx.trail.len(), 3);

        ctx.place_symbol(2, 1);
        assert_eq!(ctx.frontier(), 2);
        assert_eq!(ctx.symbols(), &[0, 0, 1, 0]);
    }

    #[test]
    fn test_rewind_restores_symbols_and_frontier() {
        let mut ctx = context(4, 3);
        ctx.place_symbol(0, 0);
        let checkpoint = ctx.trail.checkpoint();

        ctx.place_symbol(1, 1);
        ctx.place_symbol(2, 2);
        assert_eq!(ctx.frontier(), 3);

        ctx.rewind_to(checkpoint);
        assert_eq!(ctx.frontier(), 1);
        assert_eq!(ctx.symbols(), &[0, 0, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "not available at frontier")]
    fn test_place_symbol_beyond_frontier() {
        let mut ctx = context(4, 3);
        ctx.place_symbol(0, 1);
    }

    #[test]
    #[should_panic(expected = "Position out of bounds")]
    fn test_place_symbol_out_of_bounds() {
        let mut ctx = context(3, 2);
        ctx.place_symbol(3, 0);
    }

    #[test]
    fn test_independent_contexts() {
        let mut ctx1 = context(3, 2);
        let ctx2 = context(3, 2);

        ctx1.place_symbol(0, 0);
        assert_eq!(ctx1.frontier(), 1);
        assert_eq!(ctx2.frontier(), 0);
        assert!(ctx2.trail.is_empty());
    }

    #[test]
    fn test_distinct_in_prefix() {
        assert_eq!(distinct_in_prefix(&[]), 0);
        assert_eq!(distinct_in_prefix(&[0, 0]), 1);
        assert_eq!(distinct_in_prefix(&[0, 1, 0, 2]), 3);
    }
}
