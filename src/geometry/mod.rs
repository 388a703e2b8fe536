// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Card geometry types.
//!
//! This module contains type-safe representations of the card model:
//! - Track: a row position under the reading head
//! - TrackSet: bitset of tracks (a symbol's mask)
//! - Direction: ascending or descending walk along the tracks
//! - Symbol / SymbolId: a column code and its table index
//! - SymbolSet: bitset of symbols (the pool)
//! - Deck: an assembled ordering

pub mod constants;
pub mod deck;
pub mod direction;
pub mod symbol;
pub mod symbol_set;
pub mod track;
pub mod track_set;

// Re-export for convenience
pub use constants::*;
pub use deck::{write_listing, Deck};
pub use direction::Direction;
pub use symbol::{Symbol, SymbolId};
pub use symbol_set::SymbolSet;
pub use track::Track;
pub use track_set::TrackSet;
