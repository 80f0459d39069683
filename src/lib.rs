// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Count normalized arrays that are distinct under unique-element subrange
//! queries.
//!
//! A normalized array is a restricted-growth string of length `n` using
//! exactly `sigma` symbols. Two such arrays are equivalent when, for every
//! subrange `[i, j]`, both agree on whether some symbol occurs exactly once
//! in it. The crate enumerates all normalized arrays, groups them by a
//! 128-bit subrange signature, and answers queries about the result.
//!
//! # Architecture
//!
//! ## Enumeration
//!
//! Arrays are generated by a small backtracking engine:
//! - [`trail`] records every state change so the search can rewind in O(1)
//!   per change
//! - [`context`] holds the partial array and its frontier
//! - [`engine`] drives a sequence of [`engine::Predicate`]s with choice points
//! - [`predicates::RestrictedGrowthPredicate`] prunes every branch that
//!   cannot complete to a normalized array
//!
//! The engine suspends on each complete array, so [`enumerator::Enumerator`]
//! is a lazy iterator. [`enumerator::CounterEnumerator`] is a brute-force
//! alternative used for cross-checking.
//!
//! ## Classification
//!
//! - [`array::signature`] packs the per-subrange answers into a [`Signature`]
//! - [`registry`] maps signatures to equivalence classes in discovery order
//! - [`census`] ties the two together and answers index, diff and find queries
//! - [`shell`] exposes the census as a line-oriented command loop
//!
//! # Example
//!
//! ```
//! use distinct_arrays::{ArrayParams, Census};
//!
//! let census = Census::build(ArrayParams::new(4, 3).unwrap());
//! assert_eq!(census.count(), 6);
//! assert_eq!(census.count_distinct(), 4);
//! ```

pub mod array;
pub mod census;
pub mod context;
pub mod engine;
pub mod enumerator;
pub mod error;
pub mod predicates;
pub mod registry;
pub mod shell;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use array::{ArrayParams, NormalizedArray, Signature};
pub use census::Census;
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use enumerator::{CounterEnumerator, Enumerator};
pub use error::{CommandError, ConfigError, ParseArrayError};
pub use registry::EquivalenceRegistry;
pub use trail::Trail;
