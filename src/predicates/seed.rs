// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The opening predicate: install the seed prefix and the pool.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::{Direction, SymbolId, SymbolSet, Track};

/// A search request resolved against the symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub seed: Vec<SymbolId>,
    pub pool: SymbolSet,
    pub cursor: Track,
    pub direction: Direction,
    pub budget: u32,
}

/// Loads a [`Request`] into the dynamic state. Deterministic.
#[derive(Debug)]
pub struct SeedPredicate {
    request: Request,
}

impl SeedPredicate {
    pub fn new(request: Request) -> Self {
        Self { request }
    }
}

impl Predicate for SeedPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let request = &self.request;
        ctx.state.load(
            &request.seed,
            request.pool,
            request.cursor,
            request.direction,
            request.budget,
        );
        log::debug!(
            "seeded {} symbols, {} in pool, cursor {}, {}, budget {}",
            request.seed.len(),
            request.pool.len(),
            request.cursor,
            request.direction,
            request.budget
        );
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Seed"
    }
}
