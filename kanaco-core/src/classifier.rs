//! Unit classification
//!
//! Maps a scanned unit to the set of conversion categories it is eligible
//! for. Ranges are taken from the Unicode code charts for Basic Latin,
//! CJK Symbols and Punctuation, Hiragana, Katakana and Halfwidth and
//! Fullwidth Forms.

use core::fmt;

bitflags::bitflags! {
    /// Category flags attached to a code unit
    ///
    /// An empty set means the unit passes through every directive untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategoryFlags: u16 {
        /// Half-width (narrow) rendering
        const HALF = 1 << 0;
        /// Full-width (wide) rendering
        const FULL = 1 << 1;
        /// Space
        const SPACE = 1 << 2;
        /// Decimal digit
        const DIGIT = 1 << 3;
        /// Upper-case Latin letter
        const UPPER = 1 << 4;
        /// Lower-case Latin letter
        const LOWER = 1 << 5;
        /// Printable ASCII repertoire except `"`, `'` and `\`
        const PRINTABLE = 1 << 6;
        /// Katakana letter
        const KATAKANA = 1 << 7;
        /// Hiragana letter
        const HIRAGANA = 1 << 8;
        /// Punctuation and sound marks shared by both kana scripts (、。「」・ー゛゜)
        const KANA_MARK = 1 << 9;
        /// Half-width kana merged with a trailing voiced mark
        const VOICED = 1 << 10;
        /// Half-width kana merged with a trailing semi-voiced mark
        const SEMI_VOICED = 1 << 11;
    }
}

impl CategoryFlags {
    /// Width class of the unit
    pub fn width(self) -> Width {
        if self.contains(Self::HALF) {
            Width::Half
        } else if self.contains(Self::FULL) {
            Width::Full
        } else {
            Width::NotApplicable
        }
    }

    /// Voicing state of the unit
    pub fn voicing(self) -> Voicing {
        if self.contains(Self::VOICED) {
            Voicing::Voiced
        } else if self.contains(Self::SEMI_VOICED) {
            Voicing::SemiVoiced
        } else {
            Voicing::Plain
        }
    }

    /// Lower-case names of the flags that are set, in declaration order
    pub fn names(self) -> impl Iterator<Item = String> {
        self.iter_names()
            .map(|(name, _)| name.to_ascii_lowercase().replace('_', "-"))
    }
}

impl fmt::Display for CategoryFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}

/// Width class of a code unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// Half-width (hankaku)
    Half,
    /// Full-width (zenkaku)
    Full,
    /// Outside the convertible repertoire
    NotApplicable,
}

/// Voicing state of a half-width kana unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Voicing {
    /// No trailing mark
    #[default]
    Plain,
    /// Followed by ﾞ (U+FF9E)
    Voiced,
    /// Followed by ﾟ (U+FF9F)
    SemiVoiced,
}

/// Half-width voiced sound mark ﾞ
pub(crate) const HALF_VOICED_MARK: [u8; 3] = [0xEF, 0xBE, 0x9E];
/// Half-width semi-voiced sound mark ﾟ
pub(crate) const HALF_SEMI_VOICED_MARK: [u8; 3] = [0xEF, 0xBE, 0x9F];

/// Classify a scanned unit
///
/// Accepts 1-, 3- and 6-byte units; everything else (2- and 4-byte
/// sequences, malformed bytes, unknown 3-byte patterns) yields
/// an empty set.
pub fn classify(unit: &[u8]) -> CategoryFlags {
    match unit.len() {
        1 => classify_ascii(unit[0]),
        3 => decode_char(unit).map_or(CategoryFlags::empty(), classify_wide),
        6 => classify_composite(unit),
        _ => CategoryFlags::empty(),
    }
}

/// Classify a single character
///
/// Same mapping as [`classify`] for units that hold exactly one scalar value.
pub fn classify_char(ch: char) -> CategoryFlags {
    if ch.is_ascii() {
        classify_ascii(ch as u8)
    } else {
        classify_wide(ch)
    }
}

fn classify_ascii(byte: u8) -> CategoryFlags {
    use CategoryFlags as F;

    match byte {
        0x20 => F::HALF | F::SPACE,
        b'0'..=b'9' => F::HALF | F::DIGIT | F::PRINTABLE,
        b'A'..=b'Z' => F::HALF | F::UPPER | F::PRINTABLE,
        b'a'..=b'z' => F::HALF | F::LOWER | F::PRINTABLE,
        b'"' | b'\'' | b'\\' => F::empty(),
        0x21..=0x7D => F::HALF | F::PRINTABLE,
        _ => F::empty(),
    }
}

fn classify_wide(ch: char) -> CategoryFlags {
    use CategoryFlags as F;

    match ch {
        // CJK Symbols and Punctuation
        '\u{3000}' => F::FULL | F::SPACE,
        '、' | '。' | '「' | '」' => F::FULL | F::KANA_MARK,

        // Hiragana: ぁ..ゖ, ゝゞ; ゛゜ are the spacing sound marks
        '\u{3041}'..='\u{3096}' | 'ゝ' | 'ゞ' => F::FULL | F::HIRAGANA,
        '゛' | '゜' => F::FULL | F::KANA_MARK,

        // Katakana: ァ..ヺ, ヽヾ; ・ー are shared with hiragana text
        '\u{30A1}'..='\u{30FA}' | 'ヽ' | 'ヾ' => F::FULL | F::KATAKANA,
        '・' | 'ー' => F::FULL | F::KANA_MARK,

        // Fullwidth ASCII variants (！..｝)
        '０'..='９' => F::FULL | F::DIGIT | F::PRINTABLE,
        'Ａ'..='Ｚ' => F::FULL | F::UPPER | F::PRINTABLE,
        'ａ'..='ｚ' => F::FULL | F::LOWER | F::PRINTABLE,
        '＂' | '＇' | '＼' => F::empty(),
        '\u{FF01}'..='\u{FF5D}' => F::FULL | F::PRINTABLE,

        // Halfwidth katakana (｡..ﾟ)
        '｡' | '｢' | '｣' | '､' | '･' | 'ｰ' | 'ﾞ' | 'ﾟ' => F::HALF | F::KANA_MARK,
        '\u{FF66}'..='\u{FF9D}' => F::HALF | F::KATAKANA,

        _ => F::empty(),
    }
}

fn classify_composite(unit: &[u8]) -> CategoryFlags {
    let (base, mark) = unit.split_at(3);
    let voicing = if mark == HALF_VOICED_MARK {
        CategoryFlags::VOICED
    } else if mark == HALF_SEMI_VOICED_MARK {
        CategoryFlags::SEMI_VOICED
    } else {
        return CategoryFlags::empty();
    };

    let flags = classify(base);
    if flags.contains(CategoryFlags::HALF | CategoryFlags::KATAKANA) {
        flags | voicing
    } else {
        CategoryFlags::empty()
    }
}

fn decode_char(bytes: &[u8]) -> Option<char> {
    core::str::from_utf8(bytes).ok()?.chars().next()
}
