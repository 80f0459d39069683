// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! RestrictedGrowthPredicate - fills the array one position per round.
//!
//! Round `i` chooses the symbol at position `i`. The candidates are bounded
//! so that every partial array can still be completed into a normalized
//! array, which means the search never backtracks out of a dead end and
//! never produces an array that has to be rejected afterwards.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;
use std::ops::RangeInclusive;

/// Symbols that may be placed at `position` when `frontier` symbols are in use.
///
/// - Any symbol already introduced may be reused, and the next new symbol may
///   be introduced while the alphabet is not exhausted:
///   `max = min(frontier, sigma - 1)`.
/// - When the remaining positions are exactly enough to introduce the missing
///   symbols, the only choice is the next new symbol: `min = frontier`.
///   Otherwise `min = 0`.
///
/// # Examples
///
/// ```
/// use distinct_arrays::predicates::candidate_range;
///
/// // n=4, sigma=3: after [1,1] two slots remain for two missing symbols
/// assert_eq!(candidate_range(4, 3, 2, 1), 1..=1);
/// // after [1,2] one symbol is missing and two slots remain
/// assert_eq!(candidate_range(4, 3, 2, 2), 0..=2);
/// // every symbol introduced: reuse only
/// assert_eq!(candidate_range(4, 3, 3, 3), 0..=2);
/// ```
pub fn candidate_range(
    length: usize,
    sigma: usize,
    position: usize,
    frontier: usize,
) -> RangeInclusive<usize> {
    debug_assert!(position < length, "position {} past end {}", position, length);
    debug_assert!(frontier <= sigma, "frontier {} beyond sigma {}", frontier, sigma);

    let slots_remaining = length - position;
    let missing = sigma - frontier;
    debug_assert!(
        slots_remaining >= missing,
        "{} symbols missing with {} slots left",
        missing,
        slots_remaining
    );

    let min = if slots_remaining == missing { frontier } else { 0 };
    let max = frontier.min(sigma - 1);
    min..=max
}

/// Enumerates restricted-growth strings over the context's parameters.
///
/// Runs for `n + 1` rounds: rounds `0..n` place one symbol each via
/// `Choices`, and round `n` succeeds with a complete normalized array.
/// Choices are tried in increasing symbol order, so completed arrays appear
/// in lexicographic order.
#[derive(Debug)]
pub struct RestrictedGrowthPredicate;

impl RestrictedGrowthPredicate {
    fn candidates(ctx: &SearchContext, round: usize) -> RangeInclusive<usize> {
        let params = ctx.params();
        candidate_range(params.length(), params.sigma(), round, ctx.frontier())
    }
}

impl Predicate for RestrictedGrowthPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let params = ctx.params();
        if round == params.length() {
            // Complete: the bounds guarantee every symbol was introduced
            debug_assert_eq!(ctx.frontier(), params.sigma());
            return PredicateResult::Success;
        }

        let candidates = Self::candidates(ctx, round);
        PredicateResult::Choices(candidates.end() - candidates.start() + 1)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // The trail has restored the frontier to its value when try_pred ran
        let candidates = Self::candidates(ctx, round);
        let symbol = candidates.start() + choice;

        debug_assert!(
            candidates.contains(&symbol),
            "Invalid choice {} at position {}: candidates are {:?}",
            choice,
            round,
            candidates
        );

        ctx.place_symbol(round, symbol);
        ctx.statistics.increment_counter(Counters::Candidates);

        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "RestrictedGrowth"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::ArrayParams;
    use crate::context::distinct_in_prefix;

    fn context(length: usize, sigma: usize) -> SearchContext {
        SearchContext::new(ArrayParams::new(length, sigma).unwrap())
    }

    #[test]
    fn test_candidate_range_first_position() {
        // Position 0 always holds symbol 0
        for sigma in 2..=5 {
            assert_eq!(candidate_range(5, sigma, 0, 0), 0..=0);
        }
    }

    #[test]
    fn test_candidate_range_forced_introduction() {
        // n == sigma: every position introduces a new symbol
        for position in 0..4 {
            assert_eq!(candidate_range(4, 4, position, position), position..=position);
        }
    }

    #[test]
    fn test_candidate_range_alphabet_exhausted() {
        assert_eq!(candidate_range(6, 2, 4, 2), 0..=1);
    }

    #[test]
    fn test_try_pred_choices() {
        let mut ctx = context(4, 2);
        let mut pred = RestrictedGrowthPredicate;
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(1));

        ctx.place_symbol(0, 0);
        assert_eq!(pred.try_pred(&mut ctx, 1), PredicateResult::Choices(2));
    }

    #[test]
    fn test_retry_pred_places_symbol() {
        let mut ctx = context(4, 3);
        let mut pred = RestrictedGrowthPredicate;

        assert_eq!(
            pred.retry_pred(&mut ctx, 0, 0),
            PredicateResult::SuccessSamePredicate
        );
        assert_eq!(ctx.symbols()[0], 0);
        assert_eq!(ctx.frontier(), 1);

        // Choice 1 at position 1 is the new symbol 1
        pred.retry_pred(&mut ctx, 1, 1);
        assert_eq!(ctx.symbols()[1], 1);
        assert_eq!(ctx.frontier(), 2);
        assert_eq!(ctx.statistics.get(Counters::Candidates), 2);
    }

    #[test]
    fn test_final_round_succeeds() {
        let mut ctx = context(3, 2);
        let mut pred = RestrictedGrowthPredicate;
        for (position, symbol) in [0, 1, 0].into_iter().enumerate() {
            ctx.place_symbol(position, symbol);
        }
        assert_eq!(pred.try_pred(&mut ctx, 3), PredicateResult::Success);
    }

    #[test]
    fn test_frontier_tracks_distinct_symbols_along_greedy_path() {
        // Always take the largest candidate, checking the frontier at each step
        let mut ctx = context(7, 4);
        let mut pred = RestrictedGrowthPredicate;
        for round in 0..7 {
            let PredicateResult::Choices(count) = pred.try_pred(&mut ctx, round) else {
                panic!("round {} offered no choices", round);
            };
            pred.retry_pred(&mut ctx, round, count - 1);
            assert_eq!(ctx.frontier(), distinct_in_prefix(&ctx.symbols()[..=round]));
        }
        assert_eq!(ctx.symbols(), &[0, 1, 2, 3, 3, 3, 3]);
    }
}
