// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraints of the deck search.
//!
//! # Constraint Types
//!
//! **Adjacency** (`adjacency`): neighbouring symbols must not conflict. The
//! conflict rule is configurable; by default two symbols conflict when their
//! masks share a track.
//!
//! **Continuity** (`roads`): each placement moves the cursor one track up or
//! down, onto a track the placed symbol marks.
//!
//! **Switch budget** (`cost`): every step adds to a budget according to the
//! cost policy; steps that reach the cap are pruned.
//!
//! **Guards** (`guards`): the fixed slot, the prohibited zone, and the
//! pigeonhole check on scarce symbols.
//!
//! Every rejection is reported as a [`Prune`] reason.

pub mod adjacency;
pub mod cost;
pub mod errors;
pub mod guards;
pub mod roads;

pub use adjacency::AdjacencyRule;
pub use cost::{CheapTrigger, CostPolicy, WeightedCost};
pub use errors::Prune;
pub use guards::FixedSlot;
pub use roads::{ordered_roads, roads_from};
