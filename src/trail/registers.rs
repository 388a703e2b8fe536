// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trailed search registers.
//!
//! The mutable part of the walk that must be restored on backtracking lives
//! in a small file of `u64` registers. Values are encoded into `u64` by the
//! accessors on [`DynamicState`](crate::state::DynamicState).

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// Names of the trailed registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro)]
#[repr(u8)]
pub enum Register {
    /// Bits of the remaining pool ([`SymbolSet`](crate::geometry::SymbolSet)).
    Pool,
    /// Number of symbols placed so far, seed included.
    Length,
    /// Track under the reading head.
    Cursor,
    /// Direction of the last step.
    Direction,
    /// Switch budget accumulated so far.
    Budget,
}

/// The register file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers([u64; Register::COUNT]);

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, register: Register) -> u64 {
        self.0[register as usize]
    }

    /// Untrailed write. Use [`Trail::record_and_set`](super::Trail::record_and_set)
    /// for writes that must be undone on backtracking.
    pub(crate) fn set(&mut self, register: Register, value: u64) {
        self.0[register as usize] = value;
    }
}
