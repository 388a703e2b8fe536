// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for an ordering of the 62 punched-card column codes in which
//! neighbouring columns never share a punched track, while a reading head
//! walks continuously from track to track as the columns are placed.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed once per [`SearchConfig`]:
//! - The symbol table (punch codes mapped onto the configured track layout)
//! - The conflict matrix for the configured adjacency rule
//! - The scarce symbol set and the fixed slot
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - Trail - records register changes for O(1) backtracking
//! - Registers - remaining pool, sequence length, cursor, direction, budget
//!
//! # Search Algorithm
//!
//! The engine runs the predicate program `Seed, Placement, Suspend`:
//!
//! 1. **SeedPredicate**: install the seed prefix and the pool
//! 2. **PlacementPredicate**: one round per placed symbol; each round offers
//!    every (symbol, road) pair that avoids the previous symbol and continues
//!    the walk, then prunes by fixed slot, prohibited zone, scarce symbols
//!    and switch budget
//! 3. **SuspendPredicate**: reached only with an empty pool, i.e. a full deck
//!
//! [`Assembler`] wraps the program behind a validated request.

pub mod assembler;
pub mod config;
pub mod constraints;
pub mod context;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod memo;
pub mod predicates;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use assembler::{Assembler, SearchRequest};
pub use config::{FixedPosition, SearchConfig};
pub use constraints::Prune;
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{SearchError, TableError};
pub use geometry::Deck;
pub use trail::Trail;
