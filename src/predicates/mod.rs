// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the search algorithm.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `seed`: SeedPredicate loads a validated request into the dynamic state
//! - `place`: PlacementPredicate extends the sequence one symbol per round
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`
//!
//! A deck search is the program `Seed, Placement, Suspend`: the placement
//! predicate succeeds (moves on) only once the pool is empty, so reaching
//! `Suspend` means a complete deck is in the context.

pub mod place;
pub mod seed;

pub use place::PlacementPredicate;
pub use seed::{Request, SeedPredicate};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with
/// it explores every branch.
///
/// # Example
///
/// ```
/// use deck_search::config::SearchConfig;
/// use deck_search::context::SearchContext;
/// use deck_search::engine::EngineBuilder;
/// use deck_search::predicates::FailPredicate;
///
/// let mut ctx = SearchContext::new(SearchConfig::default()).unwrap();
/// let engine = EngineBuilder::new()
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
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

/// Built-in suspend predicate: pauses the engine with the solution in place.
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
