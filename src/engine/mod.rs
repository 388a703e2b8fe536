// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail system to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! The engine follows a WAM-like execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! An entry that succeeded deterministically has no alternatives left: when
//! the search backtracks into it, it is popped rather than called again.
//!
//! # Example
//!
//! ```
//! use deck_search::config::SearchConfig;
//! use deck_search::context::SearchContext;
//! use deck_search::engine::{EngineBuilder, Predicate, PredicateResult};
//! use deck_search::predicates::SuspendPredicate;
//!
//! #[derive(Debug)]
//! struct SimplePredicate;
//!
//! impl Predicate for SimplePredicate {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Success
//!     }
//! }
//!
//! let mut ctx = SearchContext::new(SearchConfig::default()).unwrap();
//! // All WAM programs must end with FAIL or SUSPEND
//! let engine = EngineBuilder::new()
//!     .add(Box::new(SimplePredicate))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! if let Some(engine) = engine.search(&mut ctx) {
//!     // Can resume with engine.search(&mut ctx)
//!     assert!(engine.search(&mut ctx).is_none());
//! }
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Maximum depth of the predicate stack.
const MAX_STACK_SIZE: usize = 1000;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

/// Builds a predicate sequence that is guaranteed to end in a terminal predicate.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the sequence.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the sequence with a FAIL or SUSPEND predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A complete predicate sequence, ready to become an engine.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states. Non-empty only while suspended.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees the sequence ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(MAX_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until the next suspension.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - calling search() again backtracks into
    ///   the suspended branch and looks for the next solution
    /// - `None` if exhausted (backtracked past first predicate) - search is complete
    ///
    /// The search modifies `ctx` with the solution state. Success is indicated via
    /// side effects (state in `ctx`), not by the return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or SUSPEND).
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.predicates.is_empty() {
            return None; // Empty is exhausted
        }

        if self.stack.is_empty() {
            self.push_entry(0, 0, ctx);
        } else {
            // Resuming: the suspending entry has no alternatives.
            self.stack.pop();
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                log::debug!(
                    "search exhausted after {} tries, {} retries",
                    self.try_count,
                    self.retry_count
                );
                return None;
            };

            // Rewind trail to this entry's checkpoint
            ctx.trail
                .rewind_to(entry.trail_checkpoint, &mut ctx.state.registers);

            if !entry.in_choice_mode {
                // Call mode: try_pred
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => {
                        self.seal_top();
                        self.push_entry(pred_idx + 1, 0, ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.seal_top();
                        self.push_entry(pred_idx, round + 1, ctx);
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.len();
                        }
                    }
                    PredicateResult::Suspend => {
                        log::trace!("suspended in {}", self.predicates[pred_idx].name());
                        return Some(self);
                    }
                }
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => {
                        self.push_entry(pred_idx + 1, 0, ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.push_entry(pred_idx, round + 1, ctx);
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Mark the top entry as having no alternatives left.
    fn seal_top(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            entry.in_choice_mode = true;
            entry.current_choice = 0;
            entry.num_choices = 0;
        }
    }

    /// Push a new stack entry.
    ///
    /// Panics if `predicate_index` is past the end of the predicate sequence,
    /// as this indicates an invalid program (all valid programs must end with
    /// FAIL or SUSPEND).
    fn push_entry(&mut self, predicate_index: usize, round: usize, ctx: &SearchContext) {
        if predicate_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All WAM programs must terminate with a FAIL or SUSPEND predicate."
            );
        }
        if self.stack.len() >= MAX_STACK_SIZE {
            panic!("Predicate stack overflow: exceeded {} entries", MAX_STACK_SIZE);
        }

        self.stack.push(StackEntry {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint: ctx.trail.len(),
        });
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::predicates::{FailPredicate, SuspendPredicate};
    use crate::trail::Register;

    fn context() -> SearchContext {
        SearchContext::new(SearchConfig::default()).unwrap()
    }

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Test predicate that always fails.
    #[derive(Debug)]
    struct AlwaysFail;

    impl Predicate for AlwaysFail {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Failure
        }
    }

    /// Writes each choice into the budget register.
    #[derive(Debug)]
    struct BudgetChoice {
        count: usize,
    }

    impl Predicate for BudgetChoice {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.count)
        }

        fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
            ctx.trail.record_and_set(
                &mut ctx.state.registers,
                Register::Budget,
                choice as u64 + 1,
            );
            PredicateResult::Success
        }
    }

    /// Succeeds only when the budget register is odd.
    #[derive(Debug)]
    struct OddBudget;

    impl Predicate for OddBudget {
        fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            if ctx.state.budget() % 2 == 1 {
                PredicateResult::Success
            } else {
                PredicateResult::Failure
            }
        }
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx);
        assert!(engine.is_some()); // Suspended - engine returned
        let engine = engine.unwrap();
        assert_eq!(engine.statistics(), (2, 0)); // AlwaysSucceed + Suspend, no retries
    }

    #[test]
    fn test_deterministic_success_is_not_retried() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysFail))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let result = engine.search(&mut ctx);
        assert!(result.is_none()); // Exhausted - engine consumed
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![]);

        let result = engine.search(&mut ctx);
        assert!(result.is_none()); // Empty is exhausted
    }

    #[test]
    fn test_choices_are_rewound_between_siblings() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(BudgetChoice { count: 4 }))
            .add(Box::new(OddBudget))
            .terminal(Box::new(SuspendPredicate))
            .build();

        // choice 0 sets budget 1: odd, first solution
        let engine = engine.search(&mut ctx).unwrap();
        assert_eq!(ctx.state.budget(), 1);

        // resume: choice 1 (budget 2) fails, choice 2 (budget 3) succeeds
        let engine = engine.search(&mut ctx).unwrap();
        assert_eq!(ctx.state.budget(), 3);

        // choice 3 fails, then exhausted; the trail restores the initial value
        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(ctx.state.budget(), 0);
        assert!(ctx.trail.is_empty());
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![
            Box::new(AlwaysSucceed), // Missing terminal predicate!
        ]);

        let _ = engine.search(&mut ctx); // Should panic
    }
}
