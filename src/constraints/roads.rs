// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Road oracle: where the walk may go when a symbol is placed.

use crate::geometry::{Symbol, Track, TrackSet};
use crate::memo::TrackLayout;

/// Tracks reachable from `cursor` when `symbol` is placed next.
///
/// A road is a single step, up or down, onto a walkable track that `symbol`
/// marks. Both neighbours are checked independently.
pub fn roads_from(symbol: &Symbol, cursor: Track, layout: TrackLayout) -> TrackSet {
    let mut roads = TrackSet::empty();
    for next in [cursor.below(), cursor.above()].into_iter().flatten() {
        if next.as_usize() < layout.walkable() && symbol.mask().contains(next) {
            roads.insert(next);
        }
    }
    roads
}

/// Roads in the order the search tries them: down first, then up.
pub fn ordered_roads(roads: TrackSet, cursor: Track) -> impl Iterator<Item = Track> {
    [cursor.below(), cursor.above()]
        .into_iter()
        .flatten()
        .filter(move |&track| roads.contains(track))
}
