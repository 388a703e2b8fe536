// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The symbol table: 62 card codes and their track masks.
//!
//! Codes are written as the card rows they punch (IBM 029 keypunch code);
//! a [`TrackLayout`] turns rows into track positions. The cent sign is
//! stored as `c` so that every symbol is a single ASCII character.

use crate::error::TableError;
use crate::geometry::constants::ALPHABET_SIZE;
use crate::geometry::{Symbol, SymbolId, Track, TrackSet};

/// Punch rows for every symbol, in table order.
pub const PUNCH_CODES: [(char, &[u8]); ALPHABET_SIZE] = [
    ('0', &[0]),
    ('1', &[1]),
    ('2', &[2]),
    ('3', &[3]),
    ('4', &[4]),
    ('5', &[5]),
    ('6', &[6]),
    ('7', &[7]),
    ('8', &[8]),
    ('9', &[9]),
    ('A', &[12, 1]),
    ('B', &[12, 2]),
    ('C', &[12, 3]),
    ('D', &[12, 4]),
    ('E', &[12, 5]),
    ('F', &[12, 6]),
    ('G', &[12, 7]),
    ('H', &[12, 8]),
    ('I', &[12, 9]),
    ('J', &[11, 1]),
    ('K', &[11, 2]),
    ('L', &[11, 3]),
    ('M', &[11, 4]),
    ('N', &[11, 5]),
    ('O', &[11, 6]),
    ('P', &[11, 7]),
    ('Q', &[11, 8]),
    ('R', &[11, 9]),
    ('S', &[0, 2]),
    ('T', &[0, 3]),
    ('U', &[0, 4]),
    ('V', &[0, 5]),
    ('W', &[0, 6]),
    ('X', &[0, 7]),
    ('Y', &[0, 8]),
    ('Z', &[0, 9]),
    ('&', &[12]),
    ('-', &[11]),
    (':', &[2, 8]),
    ('#', &[3, 8]),
    ('@', &[4, 8]),
    ('\'', &[5, 8]),
    ('=', &[6, 8]),
    ('"', &[7, 8]),
    ('c', &[12, 2, 8]),
    ('.', &[12, 3, 8]),
    ('<', &[12, 4, 8]),
    ('(', &[12, 5, 8]),
    ('+', &[12, 6, 8]),
    ('|', &[12, 7, 8]),
    ('!', &[11, 2, 8]),
    ('$', &[11, 3, 8]),
    ('*', &[11, 4, 8]),
    (')', &[11, 5, 8]),
    (';', &[11, 6, 8]),
    ('^', &[11, 7, 8]),
    (',', &[0, 3, 8]),
    ('%', &[0, 4, 8]),
    ('_', &[0, 5, 8]),
    ('>', &[0, 6, 8]),
    ('?', &[0, 7, 8]),
    ('/', &[0, 1]),
];

/// How punch rows map onto track positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackLayout {
    /// 12 tracks in card order: 12, 11, 0, 1..9. The walk may use all of them.
    Zoned,
    /// 13 tracks: rows 0..9 at their own index, 12 at 11, 11 at 12 (track 10
    /// unused). The walk is confined to the digit rows 0..9.
    Legacy,
}

impl TrackLayout {
    /// Number of track positions in a mask.
    pub fn width(self) -> usize {
        match self {
            TrackLayout::Zoned => 12,
            TrackLayout::Legacy => 13,
        }
    }

    /// Number of tracks, counted from track 0, that the walk may move onto.
    pub fn walkable(self) -> usize {
        match self {
            TrackLayout::Zoned => 12,
            TrackLayout::Legacy => 10,
        }
    }

    /// Track position of a punch row, or `None` if `row` is not one of
    /// 0..=9, 11, 12.
    pub fn track_for_row(self, row: u8) -> Option<Track> {
        let value = match (self, row) {
            (TrackLayout::Zoned, 12) => 0,
            (TrackLayout::Zoned, 11) => 1,
            (TrackLayout::Zoned, 0) => 2,
            (TrackLayout::Zoned, 1..=9) => row + 2,
            (TrackLayout::Legacy, 0..=9) => row,
            (TrackLayout::Legacy, 12) => 11,
            (TrackLayout::Legacy, 11) => 12,
            _ => return None,
        };
        Some(Track::new(value))
    }

    /// Mask for the punch rows of `character`.
    pub fn mask_for_rows(self, character: char, rows: &[u8]) -> Result<TrackSet, TableError> {
        let tracks = rows
            .iter()
            .map(|&row| {
                self.track_for_row(row)
                    .ok_or(TableError::InvalidRow(character, row))
            })
            .collect::<Result<Vec<Track>, _>>()?;
        Ok(TrackSet::from_tracks(&tracks))
    }
}

/// The fixed alphabet, indexed by [`SymbolId`].
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    layout: TrackLayout,
}

impl SymbolTable {
    /// Build the standard table for a layout.
    pub fn build(layout: TrackLayout) -> Result<Self, TableError> {
        Self::from_codes(&PUNCH_CODES, layout)
    }

    /// Build a table from arbitrary codes. Rows are checked, uniqueness is not.
    ///
    /// Use [`validate`](Self::validate) to check the result.
    pub fn from_codes(codes: &[(char, &[u8])], layout: TrackLayout) -> Result<Self, TableError> {
        if codes.len() > ALPHABET_SIZE {
            return Err(TableError::WrongSize {
                expected: ALPHABET_SIZE,
                actual: codes.len(),
            });
        }
        Ok(Self {
            symbols: symbols_for(codes, layout)?,
            layout,
        })
    }

    /// Check the table invariants: exactly ALPHABET_SIZE entries, no two
    /// entries sharing a character, no two entries sharing a mask.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.symbols.len() != ALPHABET_SIZE {
            return Err(TableError::WrongSize {
                expected: ALPHABET_SIZE,
                actual: self.symbols.len(),
            });
        }
        for (i, a) in self.symbols.iter().enumerate() {
            for b in &self.symbols[i + 1..] {
                if a.character() == b.character() {
                    return Err(TableError::DuplicateCharacter(a.character()));
                }
                if a.mask() == b.mask() {
                    return Err(TableError::DuplicateMask {
                        first: a.character(),
                        second: b.character(),
                        mask: a.mask(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn layout(&self) -> TrackLayout {
        self.layout
    }

    /// Find a symbol by character.
    pub fn lookup(&self, character: char) -> Option<Symbol> {
        self.symbols
            .iter()
            .find(|s| s.character() == character)
            .copied()
    }

    /// Get a symbol by id.
    pub fn get(&self, id: SymbolId) -> Symbol {
        self.symbols[id.as_usize()]
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}

fn symbols_for(codes: &[(char, &[u8])], layout: TrackLayout) -> Result<Vec<Symbol>, TableError> {
    codes
        .iter()
        .enumerate()
        .map(|(i, &(character, rows))| {
            let mask = layout.mask_for_rows(character, rows)?;
            Ok(Symbol::new(SymbolId::new(i as u8), character, mask))
        })
        .collect()
}
