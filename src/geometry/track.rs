// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Track positions.
//!
//! A track is one row position on the card as seen by the reading head. Tracks
//! are numbered from the top edge (0) downwards; how punch rows map to tracks
//! is decided by the [`TrackLayout`](crate::memo::TrackLayout).

use crate::geometry::constants::MAX_TRACK_WIDTH;
use std::fmt;

/// A track position in the range 0..MAX_TRACK_WIDTH.
///
/// Newtype wrapper so that track positions cannot be mixed up with sequence
/// indices or symbol ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Track(u8);

impl Track {
    /// Create a new track, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= MAX_TRACK_WIDTH`.
    pub fn new(value: u8) -> Self {
        assert!(
            (value as usize) < MAX_TRACK_WIDTH,
            "Track out of range: {}",
            value
        );
        Self(value)
    }

    /// Try to create a new track, returning None if out of range.
    pub fn try_new(value: usize) -> Option<Self> {
        if value < MAX_TRACK_WIDTH {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the track as a usize (for array indexing and comparisons).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The neighbouring track one step down, if any.
    pub fn below(self) -> Option<Self> {
        Self::try_new(self.as_usize() + 1)
    }

    /// The neighbouring track one step up, if any.
    pub fn above(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_new() {
        assert_eq!(Track::new(0).value(), 0);
        assert_eq!(Track::new(12).as_usize(), 12);
    }

    #[test]
    #[should_panic(expected = "Track out of range")]
    fn test_track_out_of_range() {
        Track::new(13);
    }

    #[test]
    fn test_track_try_new() {
        assert!(Track::try_new(0).is_some());
        assert!(Track::try_new(12).is_some());
        assert!(Track::try_new(13).is_none());
    }

    #[test]
    fn test_neighbours() {
        assert_eq!(Track::new(0).above(), None);
        assert_eq!(Track::new(0).below(), Some(Track::new(1)));
        assert_eq!(Track::new(12).below(), None);
        assert_eq!(Track::new(5).above(), Some(Track::new(4)));
    }
}
