// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reasons a branch of the search is pruned.

use strum_macros::EnumCount as EnumCountMacro;
use thiserror::Error;

/// Why a placement (or a whole search call) was rejected.
///
/// Prunes are local: the engine consumes them by backtracking. Only the reason
/// of the last branch tried is reported when the whole search is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, EnumCountMacro)]
#[repr(u8)]
pub enum Prune {
    /// No remaining symbol avoids the previous one and offers a road from the cursor.
    #[error("no candidate avoids the previous symbol with a road from the cursor")]
    NoCandidate,

    /// Every viable road would push the switch budget to the cap.
    #[error("too many direction switches")]
    BudgetExceeded,

    /// The fixed index would receive the wrong symbol.
    #[error("the fixed position requires a different symbol")]
    FixedPositionViolation,

    /// The cursor is inside the prohibited zone.
    #[error("the walk cannot continue from the prohibited zone")]
    ProhibitedZone,

    /// Too few slots remain to keep the scarce symbols apart.
    #[error("scarce symbols can no longer be kept apart")]
    InfeasibleRemainder,
}

impl Prune {
    /// Every reason, in declaration order.
    pub const ALL: [Prune; 5] = [
        Prune::NoCandidate,
        Prune::BudgetExceeded,
        Prune::FixedPositionViolation,
        Prune::ProhibitedZone,
        Prune::InfeasibleRemainder,
    ];
}
