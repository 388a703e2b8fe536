// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types surfaced to callers of the search.

use thiserror::Error;

use crate::constraints::Prune;
use crate::geometry::TrackSet;

/// The symbol table violates one of its invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("symbol table has {actual} entries, expected {expected}")]
    WrongSize { expected: usize, actual: usize },

    /// A code punches a row that is not on the card.
    #[error("character {0:?} punches row {1}, which is not a card row")]
    InvalidRow(char, u8),

    #[error("character {0:?} appears twice in the symbol table")]
    DuplicateCharacter(char),

    #[error("{first:?} and {second:?} share the mask {mask}")]
    DuplicateMask {
        first: char,
        second: char,
        mask: TrackSet,
    },
}

/// Failure of a top-level search request.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Every branch was pruned; carries the reason of the last branch tried.
    #[error("no deck available: {0}")]
    Exhausted(Prune),

    #[error("unknown symbol {0:?}")]
    UnknownSymbol(char),

    /// A symbol appears twice across the seed and the pool.
    #[error("symbol {0:?} is used more than once")]
    DuplicateSymbol(char),

    #[error("cursor {cursor} is outside the {width}-track layout")]
    CursorOutOfRange { cursor: usize, width: usize },

    /// The seed itself places two conflicting symbols side by side.
    #[error("seed places {first:?} next to conflicting {second:?}")]
    SeedAdjacency { first: char, second: char },

    /// The designated symbol is not at its index in the seed.
    #[error("seed has {found:?} at index {index}, where only {expected:?} may go")]
    SeedFixedPosition {
        index: usize,
        expected: char,
        found: char,
    },

    #[error("scarce row {0} is not a card row")]
    InvalidScarceRow(u8),

    #[error("symbol table error: {0}")]
    Table(#[from] TableError),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// The prune reason, when the search ran and was exhausted.
    pub fn prune(&self) -> Option<Prune> {
        match self {
            SearchError::Exhausted(reason) => Some(*reason),
            _ => None,
        }
    }
}
