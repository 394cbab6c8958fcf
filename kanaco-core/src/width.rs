//! Width conversion by code point offset
//!
//! The Halfwidth and Fullwidth Forms block mirrors printable ASCII at a
//! fixed distance: `！` (U+FF01) through `～` (U+FF5E) sit exactly
//! `0xFEE0` above `!` through `~`. Space is the one exception and maps to
//! the ideographic space U+3000.

/// Distance between an ASCII character and its full-width form
pub const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Ideographic (full-width) space
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Full-width form of a printable ASCII character
pub fn widen(ch: char) -> Option<char> {
    match ch {
        ' ' => Some(IDEOGRAPHIC_SPACE),
        '!'..='~' => char::from_u32(ch as u32 + FULLWIDTH_OFFSET),
        _ => None,
    }
}

/// ASCII form of a full-width character
pub fn narrow(ch: char) -> Option<char> {
    match ch {
        IDEOGRAPHIC_SPACE => Some(' '),
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(ch as u32 - FULLWIDTH_OFFSET),
        _ => None,
    }
}
