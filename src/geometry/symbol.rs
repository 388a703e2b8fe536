// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symbols: one card column code each.

use crate::geometry::constants::ALPHABET_SIZE;
use crate::geometry::TrackSet;
use std::fmt;

/// Index of a symbol in the symbol table, in the range 0..ALPHABET_SIZE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SymbolId(u8);

impl SymbolId {
    /// Create a new symbol id, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= ALPHABET_SIZE`.
    pub fn new(value: u8) -> Self {
        assert!(
            (value as usize) < ALPHABET_SIZE,
            "SymbolId out of range: {}",
            value
        );
        Self(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the id as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A coded symbol: a printable character and the tracks its column marks.
///
/// Symbols are created once by the [`SymbolTable`](crate::memo::SymbolTable)
/// and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: SymbolId,
    character: char,
    mask: TrackSet,
}

impl Symbol {
    pub(crate) fn new(id: SymbolId, character: char, mask: TrackSet) -> Self {
        Self {
            id,
            character,
            mask,
        }
    }

    pub fn id(&self) -> SymbolId {
        self.id
    }

    pub fn character(&self) -> char {
        self.character
    }

    /// Tracks marked by this symbol.
    pub fn mask(&self) -> TrackSet {
        self.mask
    }

    /// One diagram row, e.g. `A: * . . * . . . . . . . .`.
    pub fn diagram(&self, width: usize) -> String {
        format!("{}: {}", self.character, self.mask.diagram(width))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.character)
    }
}
