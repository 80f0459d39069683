// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of normalized arrays.
//!
//! [`Enumerator`] runs the backtracking engine with
//! [`RestrictedGrowthPredicate`] and hands out each completed array as the
//! engine suspends on it. [`CounterEnumerator`] walks every base-`sigma`
//! counter value and keeps the normalized ones; it is much slower and exists
//! to cross-check the backtracking order.
//!
//! Both yield `(index, array)` pairs with 1-based indices, in lexicographic
//! order, and are finite and not restartable.
//!
//! # Examples
//!
//! ```
//! use distinct_arrays::array::ArrayParams;
//! use distinct_arrays::enumerator::Enumerator;
//!
//! let params = ArrayParams::new(3, 2).unwrap();
//! let arrays: Vec<String> = Enumerator::new(params)
//!     .map(|(index, array)| format!("#{}: {}", index, array))
//!     .collect();
//! assert_eq!(arrays, ["#1: [1,1,2]", "#2: [1,2,1]", "#3: [1,2,2]"]);
//! ```

pub mod counter;

pub use counter::CounterEnumerator;

use crate::array::{ArrayParams, NormalizedArray};
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::predicates::{RestrictedGrowthPredicate, SuspendPredicate};
use crate::state::{Counters, Statistics};

/// Lazy backtracking enumerator of normalized arrays.
#[derive(Debug)]
pub struct Enumerator {
    ctx: SearchContext,
    /// `None` once the search is exhausted.
    engine: Option<SearchEngine>,
    index: usize,
}

impl Enumerator {
    /// Prepare the search. No array is generated until the first `next()`.
    pub fn new(params: ArrayParams) -> Self {
        let engine = EngineBuilder::new()
            .add(Box::new(RestrictedGrowthPredicate))
            .add(Statistics::counting_predicate(Counters::NormalizedArrays, None))
            .terminal(Box::new(SuspendPredicate))
            .build();

        Self {
            ctx: SearchContext::new(params),
            engine: Some(engine),
            index: 0,
        }
    }

    pub fn params(&self) -> ArrayParams {
        self.ctx.params()
    }

    /// Counters for the search so far.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }

    /// Engine `(try_count, retry_count)`, or `None` once exhausted.
    pub fn engine_statistics(&self) -> Option<(u64, u64)> {
        self.engine.as_ref().map(SearchEngine::statistics)
    }
}

impl Iterator for Enumerator {
    type Item = (usize, NormalizedArray);

    fn next(&mut self) -> Option<Self::Item> {
        let engine = self.engine.take()?;
        self.engine = engine.search(&mut self.ctx);
        self.engine.as_ref()?;

        self.index += 1;
        Some((self.index, self.ctx.current_array()))
    }
}

impl std::iter::FusedIterator for Enumerator {}

/// Number of normalized arrays for `params`: the Stirling number of the
/// second kind `S(n, sigma)`.
///
/// Computed with the recurrence `S(n, k) = k * S(n-1, k) + S(n-1, k-1)`.
pub fn expected_count(params: ArrayParams) -> u64 {
    let sigma = params.sigma();
    // row[k] holds S(m, k) for the current m
    let mut row = vec![0u64; sigma + 1];
    row[0] = 1;
    for _ in 0..params.length() {
        for k in (1..=sigma).rev() {
            row[k] = k as u64 * row[k] + row[k - 1];
        }
        row[0] = 0;
    }
    row[sigma]
}
