// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed adjacency conflicts.
//!
//! The adjacency rule is evaluated once for every ordered pair of symbols, so
//! the search filters candidates with one bitset operation per call.

use crate::constraints::AdjacencyRule;
use crate::geometry::constants::ALPHABET_SIZE;
use crate::geometry::{SymbolId, SymbolSet};
use crate::memo::SymbolTable;

/// Row `a` holds every symbol that may not follow `a`.
#[derive(Debug, Clone)]
pub struct ConflictMatrix {
    rows: [SymbolSet; ALPHABET_SIZE],
}

impl ConflictMatrix {
    pub fn initialize(table: &SymbolTable, rule: AdjacencyRule) -> Self {
        let mut rows = [SymbolSet::empty(); ALPHABET_SIZE];
        for previous in table.iter() {
            let row = &mut rows[previous.id().as_usize()];
            for next in table.iter() {
                if rule.conflicts(previous, next) {
                    row.insert(next.id());
                }
            }
        }
        Self { rows }
    }

    /// True if `next` may not be placed directly after `previous`.
    pub fn conflicts(&self, previous: SymbolId, next: SymbolId) -> bool {
        self.rows[previous.as_usize()].contains(next)
    }

    /// Symbols that may not follow `previous`.
    pub fn conflicting(&self, previous: SymbolId) -> SymbolSet {
        self.rows[previous.as_usize()]
    }
}
