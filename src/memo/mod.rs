// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! Everything here is computed once per [`SearchConfig`] and never changes
//! during a search:
//! - the symbol table for the configured track layout
//! - the conflict matrix for the configured adjacency rule
//! - the set of scarce symbols and the resolved fixed slot

pub mod conflicts;
pub mod symbols;

pub use conflicts::ConflictMatrix;
pub use symbols::{SymbolTable, TrackLayout, PUNCH_CODES};

use crate::config::SearchConfig;
use crate::constraints::FixedSlot;
use crate::error::SearchError;
use crate::geometry::SymbolSet;

/// Immutable precomputed data shared by every search run with one config.
#[derive(Debug, Clone)]
pub struct MemoizedData {
    pub table: SymbolTable,
    pub conflicts: ConflictMatrix,
    /// Symbols marking the scarce row; empty when the pigeonhole check is off.
    pub scarce: SymbolSet,
    pub fixed: Option<FixedSlot>,
}

impl MemoizedData {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let table = SymbolTable::build(config.layout)?;
        table.validate()?;

        let conflicts = ConflictMatrix::initialize(&table, config.adjacency);

        let scarce = match config.scarce_row {
            Some(row) => {
                let track = config
                    .layout
                    .track_for_row(row)
                    .ok_or(SearchError::InvalidScarceRow(row))?;
                table
                    .iter()
                    .filter(|s| s.mask().contains(track))
                    .map(|s| s.id())
                    .collect()
            }
            None => SymbolSet::empty(),
        };

        let fixed = match config.fixed_position {
            Some(position) => {
                let symbol = table
                    .lookup(position.character)
                    .ok_or(SearchError::UnknownSymbol(position.character))?;
                Some(FixedSlot {
                    index: position.index,
                    symbol: symbol.id(),
                })
            }
            None => None,
        };

        log::debug!(
            "memo initialized: {} symbols, {} scarce, layout {:?}, rule {:?}",
            table.len(),
            scarce.len(),
            config.layout,
            config.adjacency
        );

        Ok(Self {
            table,
            conflicts,
            scarce,
            fixed,
        })
    }
}
