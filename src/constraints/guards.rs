// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pruning guards applied to each candidate placement.
//!
//! Each guard returns the [`Prune`] reason when the placement must be rejected.

use super::errors::Prune;
use crate::geometry::{SymbolId, SymbolSet, Track};

/// A deck index that only one symbol may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedSlot {
    pub index: usize,
    pub symbol: SymbolId,
}

/// Reject `candidate` if it would land on the fixed slot without being its symbol.
pub fn check_fixed_position(
    fixed: Option<FixedSlot>,
    index: usize,
    candidate: SymbolId,
) -> Result<(), Prune> {
    match fixed {
        Some(slot) if slot.index == index && slot.symbol != candidate => {
            Err(Prune::FixedPositionViolation)
        }
        _ => Ok(()),
    }
}

/// Reject any move while the cursor is above `threshold` (inside the zone rows).
pub fn check_prohibited_zone(threshold: Option<usize>, cursor: Track) -> Result<(), Prune> {
    match threshold {
        Some(limit) if cursor.as_usize() < limit => Err(Prune::ProhibitedZone),
        _ => Ok(()),
    }
}

/// Pigeonhole check on the scarce symbols.
///
/// Scarce symbols all mark the same track, so no two may be adjacent. With
/// `slots` open places left (the candidate's included) at most `slots / 2` of
/// the symbols still in the pool after placing `candidate` can be kept apart.
pub fn check_scarce_remainder(
    scarce: SymbolSet,
    pool: SymbolSet,
    candidate: SymbolId,
) -> Result<(), Prune> {
    if scarce.is_empty() {
        return Ok(());
    }
    let slots = pool.len();
    let remaining = pool.without(candidate).intersection(scarce).len();
    if slots / 2 < remaining {
        Err(Prune::InfeasibleRemainder)
    } else {
        Ok(())
    }
}

/// Reject a step whose budget reaches the cap.
pub fn check_budget(budget: u32, cap: u32) -> Result<(), Prune> {
    if budget >= cap {
        Err(Prune::BudgetExceeded)
    } else {
        Ok(())
    }
}
