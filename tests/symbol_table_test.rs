// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symbol table and oracle properties over the whole alphabet.

use deck_search::constraints::{roads_from, AdjacencyRule};
use deck_search::geometry::{SymbolId, Track};
use deck_search::memo::{ConflictMatrix, SymbolTable, TrackLayout};
use proptest::prelude::*;

const LAYOUTS: [TrackLayout; 2] = [TrackLayout::Zoned, TrackLayout::Legacy];

#[test]
fn test_both_layouts_validate() {
    for layout in LAYOUTS {
        let table = SymbolTable::build(layout).unwrap();
        assert_eq!(table.len(), 62);
        assert_eq!(table.validate(), Ok(()));
    }
}

#[test]
fn test_known_conflicts() {
    let table = SymbolTable::build(TrackLayout::Zoned).unwrap();
    let matrix = ConflictMatrix::initialize(&table, AdjacencyRule::SharedTrack);
    let id = |c: char| table.lookup(c).unwrap().id();

    assert!(!matrix.conflicts(id('D'), id('S')));
    assert!(matrix.conflicts(id('B'), id('S')));
    assert!(matrix.conflicts(id('"'), id('|')));
    assert!(matrix.conflicts(id('|'), id('*')));
}

#[test]
fn test_known_roads() {
    let table = SymbolTable::build(TrackLayout::Zoned).unwrap();
    let d = table.lookup('D').unwrap();
    let roads = |cursor: u8| -> Vec<u8> {
        roads_from(&d, Track::new(cursor), TrackLayout::Zoned)
            .iter()
            .map(Track::value)
            .collect()
    };
    assert_eq!(roads(5), vec![6]);
    assert_eq!(roads(6), Vec::<u8>::new());
    assert_eq!(roads(7), vec![6]);
}

#[test]
fn test_legacy_walk_stays_on_digit_rows() {
    let table = SymbolTable::build(TrackLayout::Legacy).unwrap();
    // '-' is row 11 only (track 12); '9' is track 9, so 10 is never a road
    let minus = table.lookup('-').unwrap();
    for cursor in 0..12u8 {
        assert!(roads_from(&minus, Track::new(cursor), TrackLayout::Legacy).is_empty());
    }
    let nine = table.lookup('9').unwrap();
    assert!(!roads_from(&nine, Track::new(8), TrackLayout::Legacy).is_empty());
}

proptest! {
    #[test]
    fn prop_distinct_ids_have_distinct_symbols(a in 0u8..62, b in 0u8..62, zoned in any::<bool>()) {
        prop_assume!(a != b);
        let layout = if zoned { TrackLayout::Zoned } else { TrackLayout::Legacy };
        let table = SymbolTable::build(layout).unwrap();
        let x = table.get(SymbolId::new(a));
        let y = table.get(SymbolId::new(b));
        prop_assert_ne!(x.character(), y.character());
        prop_assert_ne!(x.mask(), y.mask());
        prop_assert_eq!(table.lookup(x.character()), Some(x));
    }

    #[test]
    fn prop_shared_track_is_symmetric(a in 0u8..62, b in 0u8..62) {
        let table = SymbolTable::build(TrackLayout::Zoned).unwrap();
        let x = table.get(SymbolId::new(a));
        let y = table.get(SymbolId::new(b));
        prop_assert_eq!(
            AdjacencyRule::SharedTrack.conflicts(&x, &y),
            AdjacencyRule::SharedTrack.conflicts(&y, &x)
        );
    }

    #[test]
    fn prop_roads_are_neighbours_on_the_mask(a in 0u8..62, cursor in 0u8..12) {
        let table = SymbolTable::build(TrackLayout::Zoned).unwrap();
        let symbol = table.get(SymbolId::new(a));
        for road in roads_from(&symbol, Track::new(cursor), TrackLayout::Zoned).iter() {
            prop_assert_eq!(road.value().abs_diff(cursor), 1);
            prop_assert!(symbol.mask().contains(road));
        }
    }
}
