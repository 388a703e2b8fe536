// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs predicates in sequence
//! - Handles Choices and retry_pred correctly
//! - Backtracks on failure
//! - Restores state via trail
//! - Supports SuccessSamePredicate for multi-round predicates
//! - Suspends execution when requested, and resumes from the suspension

mod common;

use common::{CursorChoice, CursorIs, Rounds};
use deck_search::context::SearchContext;
use deck_search::engine::EngineBuilder;
use deck_search::geometry::Track;
use deck_search::predicates::{FailPredicate, SuspendPredicate};
use deck_search::SearchConfig;

fn context() -> SearchContext {
    SearchContext::new(SearchConfig::default()).unwrap()
}

#[test]
fn test_choice_then_suspend() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .add(Box::new(CursorChoice { count: 10 }))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx);
    assert!(engine.is_some()); // Suspended
    let (tries, retries) = engine.unwrap().statistics();
    assert_eq!(tries, 2); // CursorChoice.try_pred + Suspend.try_pred
    assert_eq!(retries, 1); // CursorChoice.retry_pred(choice=0)
    assert_eq!(ctx.state.cursor(), Track::new(1));
}

#[test]
fn test_backtracking_finds_later_choice() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .add(Box::new(CursorChoice { count: 5 }))
        .add(Box::new(CursorIs(Track::new(4))))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    assert_eq!(ctx.state.cursor(), Track::new(4));
    let (_, retries) = engine.statistics();
    assert_eq!(retries, 4);
}

#[test]
fn test_resume_enumerates_solutions() {
    let mut ctx = context();
    let mut engine = Some(
        EngineBuilder::new()
            .add(Box::new(CursorChoice { count: 3 }))
            .add(Box::new(CursorChoice { count: 2 }))
            .terminal(Box::new(SuspendPredicate))
            .build(),
    );

    let mut solutions = 0;
    while let Some(suspended) = engine {
        engine = suspended.search(&mut ctx);
        if engine.is_some() {
            solutions += 1;
        }
    }
    assert_eq!(solutions, 6);
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_fail_terminal_exhausts_everything() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .add(Box::new(CursorChoice { count: 3 }))
        .add(Box::new(CursorChoice { count: 4 }))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.state.cursor(), Track::new(0));
}

#[test]
fn test_rounds_advance() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .add(Box::new(Rounds(3)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 5); // rounds 0..=3, then Suspend
    assert_eq!(retries, 0);

    // nothing is left to try once resumed
    assert!(engine.search(&mut ctx).is_none());
}
