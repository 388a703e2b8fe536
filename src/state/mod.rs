// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, tracked on trail).
//!
//! The placed prefix, the remaining pool, the cursor, the last direction and
//! the switch budget. The scalar parts live in trailed [`Registers`]; the
//! placement arrays are only meaningful up to the trailed length, so they
//! need no trail entries of their own.

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::constraints::Prune;
use crate::geometry::constants::ALPHABET_SIZE;
use crate::geometry::{Direction, SymbolId, SymbolSet, Track};
use crate::trail::{Register, Registers};

/// Mutable search state of one run.
#[derive(Debug, Clone)]
pub struct DynamicState {
    pub registers: Registers,
    placed: [SymbolId; ALPHABET_SIZE],
    /// Track reached when each non-seed symbol was placed.
    tracks: [Track; ALPHABET_SIZE],
    seed_len: usize,
    start: Track,
    /// Reason the most recent branch was pruned. Not trailed.
    pub last_prune: Option<Prune>,
}

impl DynamicState {
    pub fn new() -> Self {
        Self {
            registers: Registers::new(),
            placed: [SymbolId::default(); ALPHABET_SIZE],
            tracks: [Track::default(); ALPHABET_SIZE],
            seed_len: 0,
            start: Track::default(),
            last_prune: None,
        }
    }

    /// Load a request: the seed is placed, `pool` remains, nothing is trailed.
    pub fn load(
        &mut self,
        seed: &[SymbolId],
        pool: SymbolSet,
        cursor: Track,
        direction: Direction,
        budget: u32,
    ) {
        self.placed[..seed.len()].copy_from_slice(seed);
        self.seed_len = seed.len();
        self.start = cursor;
        self.last_prune = None;
        self.registers.set(Register::Pool, pool.bits());
        self.registers.set(Register::Length, seed.len() as u64);
        self.registers.set(Register::Cursor, u64::from(cursor.value()));
        self.registers
            .set(Register::Direction, direction.to_bits());
        self.registers.set(Register::Budget, u64::from(budget));
    }

    pub fn pool(&self) -> SymbolSet {
        SymbolSet::from_bits(self.registers.get(Register::Pool))
    }

    /// Number of symbols placed, seed included.
    pub fn len(&self) -> usize {
        self.registers.get(Register::Length) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cursor(&self) -> Track {
        Track::new(self.registers.get(Register::Cursor) as u8)
    }

    pub fn direction(&self) -> Direction {
        Direction::from_bits(self.registers.get(Register::Direction))
    }

    pub fn budget(&self) -> u32 {
        self.registers.get(Register::Budget) as u32
    }

    pub fn seed_len(&self) -> usize {
        self.seed_len
    }

    pub fn start(&self) -> Track {
        self.start
    }

    /// The placed prefix, seed first.
    pub fn placed(&self) -> &[SymbolId] {
        &self.placed[..self.len()]
    }

    /// The walk so far: one track per non-seed symbol.
    pub fn walk(&self) -> &[Track] {
        &self.tracks[self.seed_len..self.len()]
    }

    pub fn last(&self) -> Option<SymbolId> {
        self.placed().last().copied()
    }

    /// Write the slot at index `len()`. The caller advances `Length` on the trail.
    pub(crate) fn write_slot(&mut self, symbol: SymbolId, track: Track) {
        let index = self.len();
        self.placed[index] = symbol;
        self.tracks[index] = track;
    }
}

impl Default for DynamicState {
    fn default() -> Self {
        Self::new()
    }
}
