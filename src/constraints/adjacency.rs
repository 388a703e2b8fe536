// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Adjacency oracle: which symbols may not sit next to each other.

use crate::geometry::Symbol;
use std::str::FromStr;

/// Rule deciding whether `next` may follow `previous` in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdjacencyRule {
    /// Conflict when the masks share a track. Symmetric.
    #[default]
    SharedTrack,
    /// Conflict when every track of `next` is also marked by `previous`.
    Subset,
}

impl AdjacencyRule {
    /// True if `next` may not be placed directly after `previous`.
    pub fn conflicts(self, previous: &Symbol, next: &Symbol) -> bool {
        match self {
            AdjacencyRule::SharedTrack => previous.mask().intersects(next.mask()),
            AdjacencyRule::Subset => next.mask().is_subset_of(previous.mask()),
        }
    }
}

impl FromStr for AdjacencyRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shared-track" => Ok(AdjacencyRule::SharedTrack),
            "subset" => Ok(AdjacencyRule::Subset),
            other => Err(format!("unknown adjacency rule: {}", other)),
        }
    }
}
