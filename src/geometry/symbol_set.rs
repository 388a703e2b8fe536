// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SymbolSet type for representing sets of symbols as bitsets.
//!
//! The pool of unused symbols, each row of the conflict matrix, and the set of
//! scarce symbols are all SymbolSets. Since the alphabet has 62 symbols, a set
//! is a single `u64`, which is also what the trail stores.

use crate::geometry::SymbolId;

/// A set of symbols represented as a bitset.
///
/// Bit i (counting from LSB) is set if the symbol with id i is in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SymbolSet(u64);

impl SymbolSet {
    /// Create an empty symbol set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a symbol set from a raw bit value.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn contains(self, id: SymbolId) -> bool {
        (self.0 >> id.value()) & 1 != 0
    }

    pub fn insert(&mut self, id: SymbolId) {
        self.0 |= 1 << id.value();
    }

    pub fn remove(&mut self, id: SymbolId) {
        self.0 &= !(1 << id.value());
    }

    /// Copy of this set without `id`.
    pub fn without(mut self, id: SymbolId) -> Self {
        self.remove(id);
        self
    }

    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    /// Iterate over the ids in the set in ascending order, i.e. table order.
    pub fn iter(self) -> impl Iterator<Item = SymbolId> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                None
            } else {
                let idx = bits.trailing_zeros() as u8;
                bits &= bits - 1;
                Some(SymbolId::new(idx))
            }
        })
    }
}

impl FromIterator<SymbolId> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = SymbolId>>(iter: I) -> Self {
        let mut set = Self::empty();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
