// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Query facade over one completed enumeration run.
//!
//! A [`Census`] enumerates every normalized array for its parameters up
//! front, registers each in an [`EquivalenceRegistry`], and then answers
//! lookups by 1-based index, by signature and by literal contents. Nothing
//! is mutated after construction.
//!
//! # Examples
//!
//! ```
//! use distinct_arrays::array::ArrayParams;
//! use distinct_arrays::census::Census;
//!
//! let census = Census::build(ArrayParams::new(3, 2).unwrap());
//! assert_eq!(census.count(), 3);
//! assert_eq!(census.count_distinct(), 3);
//!
//! assert_eq!(census.find(&[0, 1, 0]), Some(2));
//! assert_eq!(census.find(&[0, 0, 0]), None);
//!
//! let diff = census.diff(1, 3).unwrap();
//! assert!(!diff.is_equivalent());
//! ```

use crate::array::{exists_unique, subrange_pairs, ArrayParams, NormalizedArray};
use crate::enumerator::{expected_count, Enumerator};
use crate::registry::{EquivalenceClass, EquivalenceRegistry};
use std::time::Instant;
use tracing::info;

/// A subrange on which two arrays disagree about having a unique symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disagreement {
    /// 0-based inclusive start.
    pub start: usize,
    /// 0-based inclusive end.
    pub end: usize,
    /// Result for the left array.
    pub left: bool,
    /// Result for the right array.
    pub right: bool,
}

/// Subrange-by-subrange comparison of two arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayDiff {
    pub left: usize,
    pub right: usize,
    pub disagreements: Vec<Disagreement>,
}

impl ArrayDiff {
    /// True when the arrays agree on every subrange, i.e. share a class.
    pub fn is_equivalent(&self) -> bool {
        self.disagreements.is_empty()
    }
}

/// Compare two arrays of equal length on every subrange `[i, j]`, `i < j`.
///
/// # Panics
///
/// Panics if the arrays differ in length.
pub fn diff_symbols(left: &[u8], right: &[u8], sigma: usize) -> Vec<Disagreement> {
    assert_eq!(
        left.len(),
        right.len(),
        "cannot compare arrays of different lengths"
    );
    subrange_pairs(left.len())
        .filter_map(|(start, end)| {
            let left = exists_unique(left, sigma, start, end);
            let right = exists_unique(right, sigma, start, end);
            (left != right).then_some(Disagreement {
                start,
                end,
                left,
                right,
            })
        })
        .collect()
}

/// Every normalized array for one `(n, sigma)` and their equivalence classes.
#[derive(Debug, Clone)]
pub struct Census {
    params: ArrayParams,
    arrays: Vec<NormalizedArray>,
    registry: EquivalenceRegistry,
}

impl Census {
    /// Enumerate and classify every array for `params`.
    pub fn build(params: ArrayParams) -> Self {
        let started = Instant::now();
        let census = Self::from_arrays(params, Enumerator::new(params));

        debug_assert_eq!(census.count() as u64, expected_count(params));
        info!(
            n = params.length(),
            sigma = params.sigma(),
            arrays = census.count(),
            classes = census.count_distinct(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "census complete"
        );
        census
    }

    /// Classify arrays supplied in enumeration order.
    pub fn from_arrays<I>(params: ArrayParams, arrays: I) -> Self
    where
        I: IntoIterator<Item = (usize, NormalizedArray)>,
    {
        let mut registry = EquivalenceRegistry::new();
        let mut stored = Vec::new();
        for (index, array) in arrays {
            let registration = registry.register(&array);
            debug_assert_eq!(registration.index, index);
            stored.push(array);
        }

        Self {
            params,
            arrays: stored,
            registry,
        }
    }

    pub fn params(&self) -> ArrayParams {
        self.params
    }

    /// Total number of normalized arrays.
    pub fn count(&self) -> usize {
        self.arrays.len()
    }

    /// Number of equivalence classes.
    pub fn count_distinct(&self) -> usize {
        self.registry.total_classes()
    }

    pub fn registry(&self) -> &EquivalenceRegistry {
        &self.registry
    }

    /// All arrays with their 1-based indices.
    pub fn arrays(&self) -> impl ExactSizeIterator<Item = (usize, &NormalizedArray)> {
        self.arrays
            .iter()
            .enumerate()
            .map(|(offset, array)| (offset + 1, array))
    }

    /// The array with the given 1-based index.
    pub fn array(&self, index: usize) -> Option<&NormalizedArray> {
        index
            .checked_sub(1)
            .and_then(|offset| self.arrays.get(offset))
    }

    /// The equivalence class of the array with the given index.
    pub fn class_of(&self, index: usize) -> Option<&EquivalenceClass> {
        self.registry.class_of(index)
    }

    /// Compare arrays `left` and `right` on every subrange.
    ///
    /// Returns `None` if either index is unknown.
    pub fn diff(&self, left: usize, right: usize) -> Option<ArrayDiff> {
        let left_array = self.array(left)?;
        let right_array = self.array(right)?;
        Some(ArrayDiff {
            left,
            right,
            disagreements: diff_symbols(
                left_array.symbols(),
                right_array.symbols(),
                self.params.sigma(),
            ),
        })
    }

    /// Index of the array with exactly these 0-based symbols.
    pub fn find(&self, symbols: &[u8]) -> Option<usize> {
        self.arrays
            .iter()
            .position(|array| array.symbols() == symbols)
            .map(|offset| offset + 1)
    }
}
