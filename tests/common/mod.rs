// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use deck_search::context::SearchContext;
use deck_search::geometry::{Direction, Track};
use deck_search::trail::Register;
use deck_search::{Assembler, Deck, Predicate, PredicateResult, SearchConfig, SearchRequest};

/// The seed every scenario starts from.
pub const SEED: &str = "A2345D";

pub fn assembler(config: SearchConfig) -> Assembler {
    Assembler::new(config).expect("presets are valid")
}

/// Seed `A2345D`, ascending, budget 1, with the given pool and cursor.
pub fn request(pool: &str, cursor: usize) -> SearchRequest {
    SearchRequest::new(SEED)
        .with_pool(pool)
        .with_cursor(cursor)
        .with_direction(Direction::Ascending)
        .with_budget(1)
}

/// Check every structural property a returned deck must have under `config`.
pub fn assert_valid_deck(deck: &Deck, config: &SearchConfig) {
    let symbols = deck.symbols();
    for pair in symbols.windows(2) {
        assert!(
            !config.adjacency.conflicts(&pair[0], &pair[1]),
            "{} is followed by conflicting {} in {}",
            pair[0],
            pair[1],
            deck
        );
    }

    let walkable = config.layout.walkable();
    let mut cursor = deck.start();
    for (offset, &track) in deck.walk().iter().enumerate() {
        let symbol = &symbols[deck.seed_len() + offset];
        assert_eq!(
            cursor.value().abs_diff(track.value()),
            1,
            "walk jumps from {} to {} in {}",
            cursor,
            track,
            deck
        );
        assert!(track.as_usize() < walkable, "walk leaves the walkable tracks");
        assert!(
            symbol.mask().contains(track),
            "{} does not mark track {}",
            symbol,
            track
        );
        cursor = track;
    }

    if let Some(fixed) = config.fixed_position {
        if deck.len() > fixed.index {
            assert_eq!(symbols[fixed.index].character(), fixed.character);
        }
    }
}

/// Characters of a deck, sorted, for multiset comparison.
pub fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

/// Offers `count` choices and stores the chosen one (plus one) in the cursor register.
#[derive(Debug)]
pub struct CursorChoice {
    pub count: usize,
}

impl Predicate for CursorChoice {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Choices(self.count)
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        ctx.trail
            .record_and_set(&mut ctx.state.registers, Register::Cursor, choice as u64 + 1);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "CursorChoice"
    }
}

/// Succeeds only when the cursor register holds `track`.
#[derive(Debug)]
pub struct CursorIs(pub Track);

impl Predicate for CursorIs {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if ctx.state.cursor() == self.0 {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }
}

/// Stays on itself for the given number of rounds, then moves on.
#[derive(Debug)]
pub struct Rounds(pub usize);

impl Predicate for Rounds {
    fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round < self.0 {
            PredicateResult::SuccessSamePredicate
        } else {
            PredicateResult::Success
        }
    }
}
