// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! TrackSet type for representing the tracks a symbol marks, as a bitset.
//!
//! # Examples
//!
//! ```
//! use deck_search::geometry::{Track, TrackSet};
//!
//! let mut set = TrackSet::empty();
//! set.insert(Track::new(0));
//! set.insert(Track::new(3));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(format!("{}", set), "{0,3}");
//! assert_eq!(set.diagram(6), "* . . * . .");
//! ```

use crate::geometry::{constants::MAX_TRACK_WIDTH, Track};
use std::fmt;

/// A set of tracks represented as a bitset.
///
/// Bit i (counting from LSB) is set if track i is in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TrackSet(u16);

impl TrackSet {
    /// Create an empty track set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a track set from a slice of tracks.
    pub fn from_tracks(tracks: &[Track]) -> Self {
        let mut set = Self::empty();
        for &track in tracks {
            set.insert(track);
        }
        set
    }

    /// Create a track set from a raw bit value.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Check if the set contains a specific track.
    pub fn contains(self, track: Track) -> bool {
        (self.0 >> track.value()) & 1 != 0
    }

    /// Insert a track into the set.
    pub fn insert(&mut self, track: Track) {
        self.0 |= 1 << track.value();
    }

    /// Remove a track from the set.
    pub fn remove(&mut self, track: Track) {
        self.0 &= !(1 << track.value());
    }

    /// Get the number of tracks in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// True when the two sets mark at least one common track.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True when every track of `self` is also in `other`.
    pub fn is_subset_of(self, other: Self) -> bool {
        self.0 & other.0 == self.0
    }

    /// Iterate over all tracks in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Track> {
        (0..MAX_TRACK_WIDTH)
            .filter(move |&i| (self.0 >> i) & 1 != 0)
            .map(|i| Track::new(i as u8))
    }

    /// Render the first `width` tracks as `*` (marked) or `.` (not marked).
    pub fn diagram(self, width: usize) -> String {
        (0..width)
            .map(|i| if (self.0 >> i) & 1 != 0 { "*" } else { "." })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for TrackSet {
    /// Format a track set as "{0,3}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, track) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", track)?;
        }
        write!(f, "}}")
    }
}

impl From<&[Track]> for TrackSet {
    fn from(tracks: &[Track]) -> Self {
        Self::from_tracks(tracks)
    }
}
