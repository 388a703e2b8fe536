// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The placement predicate: one symbol per round until the pool is empty.
//!
//! Round `r` places the symbol at index `seed_len + r`. `try_pred` lists every
//! (symbol, road) pair that passes the adjacency and road filters, in table
//! order with the road below tried before the road above. `retry_pred` applies
//! the pruning guards and the switch budget to one pair and, if it survives,
//! places the symbol and stays on this predicate for the next round.

use crate::constraints::{guards, ordered_roads, roads_from, Prune};
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::{Direction, SymbolId, SymbolSet, Track};
use crate::state::Counters;

/// One branch of a placement round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Choice {
    symbol: SymbolId,
    road: Track,
}

#[derive(Debug, Default)]
pub struct PlacementPredicate {
    /// Choices computed by `try_pred`, indexed by round.
    choices: Vec<Vec<Choice>>,
}

impl PlacementPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Budget after taking `choice`, or the reason it must be pruned.
    fn admit(ctx: &SearchContext, choice: Choice) -> Result<u32, Prune> {
        let state = &ctx.state;
        let index = state.len();
        let cursor = state.cursor();

        guards::check_fixed_position(ctx.memo.fixed, index, choice.symbol)?;
        guards::check_prohibited_zone(ctx.config.prohibited_below, cursor)?;
        guards::check_scarce_remainder(ctx.memo.scarce, state.pool(), choice.symbol)?;

        let next = Direction::between(cursor, choice.road);
        let budget =
            ctx.config
                .cost
                .switch_cost(index, state.budget(), cursor, state.direction(), next);
        // the step that empties the pool completes the deck whatever it costs
        if !state.pool().without(choice.symbol).is_empty() {
            guards::check_budget(budget, ctx.config.cap)?;
        }
        Ok(budget)
    }
}

impl Predicate for PlacementPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        ctx.statistics.increment_counter(Counters::Calls);
        ctx.observe();

        let pool = ctx.state.pool();
        if pool.is_empty() {
            return PredicateResult::Success;
        }

        let cursor = ctx.state.cursor();
        let layout = ctx.config.layout;
        let excluded = match ctx.state.last() {
            Some(previous) => ctx.memo.conflicts.conflicting(previous),
            None => SymbolSet::empty(),
        };

        if self.choices.len() <= round {
            self.choices.resize_with(round + 1, Vec::new);
        }
        let choices = &mut self.choices[round];
        choices.clear();
        for symbol in pool.iter().filter(|&id| !excluded.contains(id)) {
            let roads = roads_from(&ctx.memo.table.get(symbol), cursor, layout);
            choices.extend(ordered_roads(roads, cursor).map(|road| Choice { symbol, road }));
        }

        if choices.is_empty() {
            log::trace!("round {}: no candidate from track {}", round, cursor);
            ctx.prune(Prune::NoCandidate);
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(choices.len())
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        let choice = self.choices[round][choice];
        match Self::admit(ctx, choice) {
            Ok(budget) => {
                log::trace!(
                    "placed {} at {} on track {}, budget {}",
                    ctx.symbol(choice.symbol),
                    ctx.state.len(),
                    choice.road,
                    budget
                );
                ctx.place(choice.symbol, choice.road, budget);
                PredicateResult::SuccessSamePredicate
            }
            Err(reason) => {
                log::trace!(
                    "pruned {} at {}: {}",
                    ctx.symbol(choice.symbol),
                    ctx.state.len(),
                    reason
                );
                ctx.prune(reason);
                PredicateResult::Failure
            }
        }
    }

    fn name(&self) -> &str {
        "Placement"
    }
}
