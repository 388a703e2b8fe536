// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Runtime configuration of the search.
//!
//! The variants of the search differ only in the policy captured here:
//! track layout, adjacency rule, switch-cost policy and cap, and the three
//! pruning guards. Two presets cover the known variants.

use crate::constraints::{AdjacencyRule, CostPolicy, WeightedCost};
use crate::memo::TrackLayout;

/// The symbol that must occupy a given deck index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedPosition {
    pub index: usize,
    pub character: char,
}

/// Policy parameters for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Row-to-track mapping (and therefore the track width).
    pub layout: TrackLayout,
    pub adjacency: AdjacencyRule,
    pub cost: CostPolicy,
    /// Steps whose budget reaches this value are pruned, unless they place
    /// the last symbol of the pool.
    pub cap: u32,
    /// The walk may not continue from tracks below this index.
    pub prohibited_below: Option<usize>,
    pub fixed_position: Option<FixedPosition>,
    /// Punch row carried by the scarce symbols checked by the pigeonhole guard.
    pub scarce_row: Option<u8>,
}

impl SearchConfig {
    /// 12-track layout with position-weighted switch costs.
    ///
    /// Every step costs at least 1, so a full deck (56 placements after the
    /// 6-symbol seed, from budget 1) needs at least 57. The cap of 64 leaves
    /// no room for a heavy turn there; heavy turns only fit shorter pools.
    pub fn weighted() -> Self {
        Self {
            layout: TrackLayout::Zoned,
            adjacency: AdjacencyRule::SharedTrack,
            cost: CostPolicy::Weighted(WeightedCost::zoned()),
            cap: 64,
            prohibited_below: Some(3),
            fixed_position: Some(FixedPosition {
                index: 7,
                character: 'B',
            }),
            scarce_row: Some(8),
        }
    }

    /// 13-track layout counting direction reversals, capped at 9.
    pub fn legacy() -> Self {
        Self {
            layout: TrackLayout::Legacy,
            adjacency: AdjacencyRule::SharedTrack,
            cost: CostPolicy::Flat,
            cap: 9,
            prohibited_below: None,
            fixed_position: Some(FixedPosition {
                index: 7,
                character: 'B',
            }),
            scarce_row: None,
        }
    }

    pub fn with_adjacency(mut self, adjacency: AdjacencyRule) -> Self {
        self.adjacency = adjacency;
        self
    }

    pub fn with_cap(mut self, cap: u32) -> Self {
        self.cap = cap;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::weighted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_weighted() {
        assert_eq!(SearchConfig::default(), SearchConfig::weighted());
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::legacy()
            .with_adjacency(AdjacencyRule::Subset)
            .with_cap(3);
        assert_eq!(config.adjacency, AdjacencyRule::Subset);
        assert_eq!(config.cap, 3);
        assert_eq!(config.layout, TrackLayout::Legacy);
    }
}
