// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The predicate protocol the engine drives.
//!
//! A program is a fixed list of predicates. Each one either commits
//! deterministically, offers a numbered set of alternatives, or fails.
//! Deck placement is a single predicate run once per round, each round
//! placing one symbol.
//!
//! # Example
//!
//! ```
//! use deck_search::context::SearchContext;
//! use deck_search::engine::{Predicate, PredicateResult};
//!
//! /// Offers the two directions a walk could leave track 0 in.
//! #[derive(Debug)]
//! struct EitherWay;
//!
//! impl Predicate for EitherWay {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
//!         match choice {
//!             0 | 1 => PredicateResult::Success,
//!             _ => PredicateResult::Failure,
//!         }
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Outcome of one call to a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Commit and move on to the next predicate.
    Success,

    /// Commit and call this predicate again with the next round.
    SuccessSamePredicate,

    /// Nothing (left) to try here: backtrack.
    Failure,

    /// `n` alternatives, explored by `retry_pred(round, 0..n)` in order.
    Choices(usize),

    /// Hand control back to the caller with the state intact.
    Suspend,
}

/// A predicate that can end a program: it fails or suspends, never succeeds.
///
/// [`EngineBuilder::terminal`](super::EngineBuilder::terminal) only accepts
/// these.
pub trait TerminalPredicate: Predicate {}

/// One step of a search program.
///
/// State changes go through trailed writes on the [`SearchContext`]. Every
/// `retry_pred` call starts from the state `try_pred` left behind: the engine
/// rewinds the trail to that point between alternatives.
pub trait Predicate: Debug {
    /// First call at this round. Rounds count up from 0 each time the
    /// predicate answers `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Take alternative `choice` after `try_pred` returned `Choices(n)`.
    ///
    /// Must not answer `Choices` or `Suspend`.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        panic!("{} offered no choices", self.name());
    }

    /// Label used in trace output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
