//! Unit scanning over raw bytes
//!
//! A unit is one logical character for conversion purposes: a single UTF-8
//! sequence, or a half-width kana merged with the sound mark that follows it
//! (`ｶﾞ` is one 6-byte unit). Malformed or truncated sequences degrade to
//! 1-byte units so that every byte of the input is consumed exactly once.

use crate::classifier::{Voicing, HALF_SEMI_VOICED_MARK, HALF_VOICED_MARK};

/// A contiguous span of input bytes treated as one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeUnit<'a> {
    /// Byte offset of the unit within the scanned input
    pub offset: usize,
    /// Raw bytes of the unit (1, 2, 3, 4 or 6 bytes)
    pub bytes: &'a [u8],
}

impl<'a> CodeUnit<'a> {
    /// Number of input bytes consumed by this unit
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Units are never empty; provided for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Voicing state carried by a merged half-width kana
    pub fn voicing(&self) -> Voicing {
        if self.bytes.len() != 6 {
            return Voicing::Plain;
        }
        match &self.bytes[3..] {
            mark if mark == HALF_VOICED_MARK => Voicing::Voiced,
            mark if mark == HALF_SEMI_VOICED_MARK => Voicing::SemiVoiced,
            _ => Voicing::Plain,
        }
    }
}

/// Scan the next unit at the start of `remaining`
///
/// Returns `None` only when `remaining` is empty.
pub fn scan_unit(remaining: &[u8]) -> Option<CodeUnit<'_>> {
    scan_at(remaining, 0)
}

fn scan_at(remaining: &[u8], offset: usize) -> Option<CodeUnit<'_>> {
    if remaining.is_empty() {
        return None;
    }

    let len = match sequence_len(remaining) {
        3 if accepts_mark(&remaining[..3], remaining.get(3..6)) => 6,
        len => len,
    };

    Some(CodeUnit {
        offset,
        bytes: &remaining[..len],
    })
}

/// Length of the UTF-8 sequence at the start of `bytes`, or 1 if malformed
fn sequence_len(bytes: &[u8]) -> usize {
    let lead = bytes[0];
    let expected = match lead {
        0x00..=0x7F => return 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return 1,
    };

    match bytes.get(1..expected) {
        Some(tail) if tail.iter().all(|&b| is_continuation(b)) => expected,
        _ => 1,
    }
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    (0x80..=0xBF).contains(&byte)
}

/// Whether a 3-byte half-width kana absorbs the following sound mark
fn accepts_mark(base: &[u8], next: Option<&[u8]>) -> bool {
    let Some(mark) = next else {
        return false;
    };

    match base {
        // ｳ (U+FF73), ｶ..ｿ (U+FF76..U+FF7F)
        [0xEF, 0xBD, 0xB3] | [0xEF, 0xBD, 0xB6..=0xBF] => mark == HALF_VOICED_MARK,
        // ﾀ..ﾄ (U+FF80..U+FF84)
        [0xEF, 0xBE, 0x80..=0x84] => mark == HALF_VOICED_MARK,
        // ﾊ..ﾎ (U+FF8A..U+FF8E)
        [0xEF, 0xBE, 0x8A..=0x8E] => mark == HALF_VOICED_MARK || mark == HALF_SEMI_VOICED_MARK,
        _ => false,
    }
}

/// Iterator over the units of a byte slice
#[derive(Debug, Clone)]
pub struct UnitScanner<'a> {
    input: &'a [u8],
    cursor: usize,
}

impl<'a> UnitScanner<'a> {
    /// Create a scanner over `input`
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, cursor: 0 }
    }

    /// Current byte position
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for UnitScanner<'a> {
    type Item = CodeUnit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let unit = scan_at(&self.input[self.cursor..], self.cursor)?;
        self.cursor += unit.len();
        Some(unit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.input.len() - self.cursor;
        (remaining.div_ceil(6), Some(remaining))
    }
}
