// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! Every trailed write records the register's previous value. Rewinding to an
//! earlier trail length replays those records in reverse, restoring the
//! registers to exactly the values they held at that length.

pub mod registers;

pub use registers::{Register, Registers};

/// A single entry in the trail, recording one register change.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    register: Register,
    old_value: u64,
}

/// The trail system for O(1) backtracking.
///
/// A checkpoint is just a trail length: the engine keeps the length reached
/// before each choice point and rewinds to it between alternatives.
///
/// # Memory Model
///
/// - DYNAMIC: The trail is mutable state (Tier 2) that changes during search
/// - Each SearchContext owns its own trail, alongside the registers it restores
#[derive(Debug)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Five registers per placement over a full deck, with room to spare.
    const MAX_SIZE: usize = 1024;

    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::MAX_SIZE),
        }
    }

    /// Set `register` to `value`, recording the old value.
    ///
    /// Writes that do not change the value are not recorded.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE (indicates a bug in the search algorithm).
    pub fn record_and_set(&mut self, registers: &mut Registers, register: Register, value: u64) {
        let old_value = registers.get(register);
        if old_value == value {
            return;
        }
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry {
            register,
            old_value,
        });
        registers.set(register, value);
    }

    /// Undo every change recorded after the trail had length `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize, registers: &mut Registers) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                registers.set(entry.register, entry.old_value);
            }
        }
    }

    /// Forget every entry, keeping the current register values.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
