// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Walking direction along the tracks.

use crate::geometry::Track;
use std::fmt;
use std::str::FromStr;

/// Direction of the last step of the track walk.
///
/// Tracks are numbered from the top of the card, so ascending (towards the top
/// edge) means the track index decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards track 0.
    Ascending,
    /// Away from track 0.
    Descending,
}

impl Direction {
    /// Direction of the step `from` → `to`.
    ///
    /// A non-move counts as ascending.
    pub fn between(from: Track, to: Track) -> Self {
        if from < to {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    /// Encoding used by the trail registers.
    pub(crate) fn to_bits(self) -> u64 {
        match self {
            Direction::Ascending => 0,
            Direction::Descending => 1,
        }
    }

    pub(crate) fn from_bits(bits: u64) -> Self {
        if bits == 0 {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ascending"),
            Direction::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" | "up" => Ok(Direction::Ascending),
            "descending" | "down" => Ok(Direction::Descending),
            other => Err(format!("unknown direction: {}", other)),
        }
    }
}
