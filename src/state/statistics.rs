// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by the placement predicate as it prunes branches.

use crate::constraints::Prune;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Calls of the placement predicate (one per visited search node).
    Calls,
    /// Symbols placed, including those later undone.
    Placements,
    Solutions,
}

const COUNT: usize = Counters::COUNT + Prune::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that increments `counter` each time the search passes it.
    pub fn counting_predicate(counter: Counters) -> Box<dyn Predicate> {
        Box::new(CountingPredicate { counter })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    pub(crate) fn record_prune(&mut self, reason: Prune) {
        self.stats[Counters::COUNT + reason as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// How many branches were pruned for `reason`.
    pub fn prunes(&self, reason: Prune) -> u64 {
        self.stats[Counters::COUNT + reason as usize]
    }

    pub fn total_prunes(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

#[derive(Debug)]
struct CountingPredicate {
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        ctx.statistics.increment_counter(self.counter);
        PredicateResult::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_and_prunes_are_separate() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Calls);
        stats.increment_counter(Counters::Calls);
        stats.record_prune(Prune::NoCandidate);
        stats.record_prune(Prune::InfeasibleRemainder);
        stats.record_prune(Prune::InfeasibleRemainder);

        assert_eq!(stats.get(Counters::Calls), 2);
        assert_eq!(stats.get(Counters::Solutions), 0);
        assert_eq!(stats.prunes(Prune::NoCandidate), 1);
        assert_eq!(stats.prunes(Prune::InfeasibleRemainder), 2);
        assert_eq!(stats.prunes(Prune::BudgetExceeded), 0);
        assert_eq!(stats.total_prunes(), 3);
    }
}
