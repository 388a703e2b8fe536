// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The assembled sequence of symbols.

use crate::geometry::{Symbol, Track};
use std::fmt;
use std::io::{self, Write};

/// A completed ordering, together with the track walk that produced it.
///
/// `walk()[i]` is the track the search moved to when it placed
/// `symbols()[seed_len() + i]`; the walk starts from `start()`. Seed symbols
/// were placed by the caller and have no recorded track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    symbols: Vec<Symbol>,
    seed_len: usize,
    start: Track,
    walk: Vec<Track>,
    width: usize,
}

impl Deck {
    pub(crate) fn new(
        symbols: Vec<Symbol>,
        seed_len: usize,
        start: Track,
        walk: Vec<Track>,
        width: usize,
    ) -> Self {
        debug_assert_eq!(symbols.len(), seed_len + walk.len());
        Self {
            symbols,
            seed_len,
            start,
            walk,
            width,
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of leading symbols that came from the seed.
    pub fn seed_len(&self) -> usize {
        self.seed_len
    }

    /// Track cursor the search started from.
    pub fn start(&self) -> Track {
        self.start
    }

    /// Tracks visited while placing the non-seed symbols.
    pub fn walk(&self) -> &[Track] {
        &self.walk
    }

    /// Track width of the layout the deck was assembled with.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Write the sequence on one line followed by one diagram row per symbol.
    pub fn write_diagram<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        write_listing(writer, &self.symbols, self.width)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Write `symbols` as a string line followed by one bit diagram row each.
///
/// ```text
/// A2
/// A: * . . * . . . . . . . .
/// 2: . . . . * . . . . . . .
/// ```
pub fn write_listing<W: Write + ?Sized>(
    writer: &mut W,
    symbols: &[Symbol],
    width: usize,
) -> io::Result<()> {
    let line: String = symbols.iter().map(Symbol::character).collect();
    writeln!(writer, "{}", line)?;
    for symbol in symbols {
        writeln!(writer, "{}", symbol.diagram(width))?;
    }
    Ok(())
}
