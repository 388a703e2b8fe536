// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direction-switch cost policy.
//!
//! Reversing the walk is expensive on the physical track, except at a few
//! turnaround tracks. The policy turns each step into a budget increment; the
//! search prunes any step whose new budget reaches the configured cap.

use crate::geometry::{Direction, Track, TrackSet};

/// What the two always-cheap indices of the weighted policy are compared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheapTrigger {
    /// The index in the deck where the symbol is being placed.
    #[default]
    PlacementIndex,
    /// The track the cursor sits on.
    TrackPosition,
}

/// Parameters of the position-weighted policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedCost {
    /// Indices at which any step costs `step`, whatever the direction.
    pub cheap_indices: [usize; 2],
    pub trigger: CheapTrigger,
    /// Tracks where turning into ascending costs only `step`.
    pub allow_up: TrackSet,
    /// Tracks where turning into descending costs only `step`.
    pub allow_down: TrackSet,
    /// Baseline cost of a step.
    pub step: u32,
    /// Cost of turning anywhere else.
    pub heavy: u32,
}

impl WeightedCost {
    /// Cheap turns at the top (track 3, row 1) and bottom (track 11, row 9)
    /// of the zoned digit rows; placements 6 and 8 are always cheap.
    pub fn zoned() -> Self {
        Self {
            cheap_indices: [6, 8],
            trigger: CheapTrigger::PlacementIndex,
            allow_up: TrackSet::from_tracks(&[Track::new(11)]),
            allow_down: TrackSet::from_tracks(&[Track::new(3)]),
            step: 1,
            heavy: 10,
        }
    }
}

/// How a step changes the switch budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostPolicy {
    /// Count direction reversals: +1 per reversal, nothing otherwise.
    Flat,
    /// Every step costs; reversals away from the turnaround tracks cost heavily.
    Weighted(WeightedCost),
}

impl CostPolicy {
    /// Budget after placing a symbol at `index` and stepping from `cursor`
    /// in `next` direction, having previously walked in `direction`.
    pub fn switch_cost(
        &self,
        index: usize,
        budget: u32,
        cursor: Track,
        direction: Direction,
        next: Direction,
    ) -> u32 {
        match self {
            CostPolicy::Flat => {
                if direction == next {
                    budget
                } else {
                    budget.saturating_add(1)
                }
            }
            CostPolicy::Weighted(w) => {
                let key = match w.trigger {
                    CheapTrigger::PlacementIndex => index,
                    CheapTrigger::TrackPosition => cursor.as_usize(),
                };
                let increment = if w.cheap_indices.contains(&key) || direction == next {
                    w.step
                } else {
                    let turnaround = match next {
                        Direction::Descending => w.allow_down,
                        Direction::Ascending => w.allow_up,
                    };
                    if turnaround.contains(cursor) {
                        w.step
                    } else {
                        w.heavy
                    }
                };
                budget.saturating_add(increment)
            }
        }
    }
}
