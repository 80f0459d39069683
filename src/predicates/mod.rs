// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! - `growth`: RestrictedGrowthPredicate, which fills the array position by position
//! - Built-in terminal predicates: `FailPredicate`, `SuspendPredicate`

pub mod growth;

pub use growth::{candidate_range, RestrictedGrowthPredicate};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking through every
/// alternative. Programs that only need side effects of earlier predicates
/// (such as counters) end with it.
///
/// # Example
///
/// ```
/// use distinct_arrays::array::ArrayParams;
/// use distinct_arrays::context::SearchContext;
/// use distinct_arrays::engine::EngineBuilder;
/// use distinct_arrays::predicates::{FailPredicate, RestrictedGrowthPredicate};
/// use distinct_arrays::state::{Counters, Statistics};
///
/// let mut ctx = SearchContext::new(ArrayParams::new(4, 2).unwrap());
/// let engine = EngineBuilder::new()
///     .add(Box::new(RestrictedGrowthPredicate))
///     .add(Statistics::counting_predicate(Counters::NormalizedArrays, None))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_none());
/// assert_eq!(ctx.statistics.get(Counters::NormalizedArrays), 7);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution.
///
/// Ending a program with it hands each solution to the caller; resuming
/// the engine moves on to the next one.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
