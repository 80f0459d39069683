// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail to provide automatic
//! state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Whether the predicate has been called, and which choice comes next
//! - The trail checkpoint to rewind to before running it again
//!
//! Execution follows a WAM-like model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A suspended engine resumes by backtracking out of the suspending
//! predicate, so a program ending in [`SuspendPredicate`] visits its
//! solutions one at a time.
//!
//! [`SuspendPredicate`]: crate::predicates::SuspendPredicate
//!
//! # Example
//!
//! ```
//! use distinct_arrays::array::ArrayParams;
//! use distinct_arrays::context::SearchContext;
//! use distinct_arrays::engine::EngineBuilder;
//! use distinct_arrays::predicates::{RestrictedGrowthPredicate, SuspendPredicate};
//!
//! let mut ctx = SearchContext::new(ArrayParams::new(3, 2).unwrap());
//! let engine = EngineBuilder::new()
//!     .add(Box::new(RestrictedGrowthPredicate))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! let engine = engine.search(&mut ctx).unwrap();
//! assert_eq!(ctx.symbols(), &[0, 0, 1]);
//!
//! let engine = engine.search(&mut ctx).unwrap();
//! assert_eq!(ctx.symbols(), &[0, 1, 0]);
//!
//! let engine = engine.search(&mut ctx).unwrap();
//! assert_eq!(ctx.symbols(), &[0, 1, 1]);
//!
//! assert!(engine.search(&mut ctx).is_none());
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use tracing::trace;

/// Initial capacity of the predicate stack.
const STACK_CAPACITY: usize = 64;

/// Where a stack entry is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryMode {
    /// try_pred has not been called yet.
    Call,
    /// try_pred returned Choices; `next` is the next choice to retry.
    Choice { next: usize, count: usize },
    /// try_pred succeeded without choices; backtracking into it fails.
    Done,
}

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    mode: EntryMode,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Set when the last call to `search` ended in a Suspend.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. The sequence must end
    /// with a predicate that fails or suspends; prefer [`EngineBuilder`],
    /// which enforces this.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(STACK_CAPACITY),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until the next suspension.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - call search() again to continue from there
    /// - `None` if exhausted (backtracked past first predicate) - search is complete
    ///
    /// Results are delivered via side effects (state in `ctx`), not by the
    /// return value. An exhausted engine is consumed and cannot be reused.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without
    /// failing or suspending), or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.predicates.is_empty() {
            return None; // Empty is exhausted
        }

        if self.suspended {
            // The suspending entry is Done, so the loop backtracks out of it
            self.suspended = false;
            trace!(depth = self.stack.len(), "resuming search");
        } else {
            self.stack.clear();
            self.try_count = 0;
            self.retry_count = 0;
            self.stack.push(StackEntry {
                predicate_index: 0,
                round: 0,
                mode: EntryMode::Call,
                trail_checkpoint: ctx.trail.checkpoint(),
            });
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                trace!(
                    tries = self.try_count,
                    retries = self.retry_count,
                    "search exhausted"
                );
                return None;
            };

            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            let pred_idx = entry.predicate_index;
            let round = entry.round;
            let mode = entry.mode;

            let result = match mode {
                EntryMode::Done => {
                    self.stack.pop();
                    continue;
                }
                EntryMode::Call => {
                    entry.mode = EntryMode::Done;
                    self.try_count += 1;
                    self.predicates[pred_idx].try_pred(ctx, round)
                }
                EntryMode::Choice { next, count } => {
                    if next >= count {
                        // Exhausted all choices
                        self.stack.pop();
                        continue;
                    }
                    entry.mode = EntryMode::Choice {
                        next: next + 1,
                        count,
                    };
                    self.retry_count += 1;
                    let result = self.predicates[pred_idx].retry_pred(ctx, round, next);
                    if matches!(result, PredicateResult::Choices(_) | PredicateResult::Suspend) {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[pred_idx].name(),
                            result
                        );
                    }
                    result
                }
            };

            match result {
                PredicateResult::Success => self.push_next_predicate(ctx),
                PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                PredicateResult::Failure => {
                    // Next iteration backtracks or tries the next choice
                }
                PredicateResult::Choices(count) => {
                    let checkpoint = ctx.trail.checkpoint();
                    if let Some(entry) = self.stack.last_mut() {
                        entry.mode = EntryMode::Choice { next: 0, count };
                        entry.trail_checkpoint = checkpoint;
                    }
                }
                PredicateResult::Suspend => {
                    self.suspended = true;
                    trace!(depth = self.stack.len(), "search suspended");
                    return Some(self);
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end by failing or suspending).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self
            .stack
            .last()
            .map_or(0, |current| current.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All predicate programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry {
            predicate_index: next_index,
            round: 0,
            mode: EntryMode::Call,
            trail_checkpoint: ctx.trail.checkpoint(),
        });
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (predicate_index, round) = self
            .stack
            .last()
            .map_or((0, 0), |current| (current.predicate_index, current.round + 1));

        self.stack.push(StackEntry {
            predicate_index,
            round,
            mode: EntryMode::Call,
            trail_checkpoint: ctx.trail.checkpoint(),
        });
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried since the search started.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for predicate programs that always end in a terminal predicate.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedProgram {
        self.predicates.push(predicate);
        TerminatedProgram {
            predicates: self.predicates,
        }
    }
}

/// A predicate program closed by a terminal predicate.
#[derive(Debug)]
pub struct TerminatedProgram {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedProgram {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
