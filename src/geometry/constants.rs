// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the card geometry.
//!
//! The alphabet size is fixed: every search permutes the same 62 punch codes.
//! The track width depends on the layout chosen at runtime (see
//! [`TrackLayout`](crate::memo::TrackLayout)), so only its upper bound lives here.

/// Number of symbols in the alphabet (one per card code).
///
/// Symbol ids are `0..ALPHABET_SIZE`, so a set of symbols fits in a `u64`.
pub const ALPHABET_SIZE: usize = 62;

/// Widest supported track layout.
///
/// The zoned layout uses 12 positions and the legacy layout 13, so a set of
/// tracks fits in a `u16`.
pub const MAX_TRACK_WIDTH: usize = 13;

const _: () = assert!(ALPHABET_SIZE <= 64, "symbol sets are u64 bitsets");
const _: () = assert!(MAX_TRACK_WIDTH <= 16, "track sets are u16 bitsets");
