//! Directives and modes
//!
//! A directive is one single-letter transform. Directives come in pairs
//! over the same category; the lower-case letter converts towards the
//! narrow form and the upper-case letter towards the wide form. A mode is
//! the ordered, de-duplicated list of directives requested for one call.

use crate::classifier::CategoryFlags;
use crate::error::{ModeError, Result};
use crate::tables;
use crate::width;
use core::fmt;
use core::str::FromStr;
use smallvec::SmallVec;

/// Conversion direction selected by the letter case of a directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the half-width form (or katakana → hiragana for `c`)
    Narrow,
    /// Towards the full-width form (or hiragana → katakana for `C`)
    Wide,
}

/// Category a directive pair operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Latin letters (r / R)
    Latin,
    /// Digits (n / N)
    Digit,
    /// Letters, digits and printable punctuation (a / A)
    Alphanumeric,
    /// Space (s / S)
    Space,
    /// Katakana width (k / K)
    Katakana,
    /// Hiragana ↔ half-width katakana (h / H)
    Hiragana,
    /// Katakana ↔ hiragana script swap (c / C)
    Script,
}

/// One of the 14 single-letter transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `r`: full-width Latin letters to half-width
    NarrowLatin,
    /// `R`: half-width Latin letters to full-width
    WideLatin,
    /// `n`: full-width digits to half-width
    NarrowDigit,
    /// `N`: half-width digits to full-width
    WideDigit,
    /// `a`: full-width letters, digits and punctuation to half-width
    NarrowAlphanumeric,
    /// `A`: half-width letters, digits and punctuation to full-width
    WideAlphanumeric,
    /// `s`: full-width space to half-width
    NarrowSpace,
    /// `S`: half-width space to full-width
    WideSpace,
    /// `k`: full-width katakana to half-width
    NarrowKatakana,
    /// `K`: half-width katakana to full-width
    WideKatakana,
    /// `h`: full-width hiragana to half-width katakana
    NarrowHiragana,
    /// `H`: half-width katakana to full-width hiragana
    WideHiragana,
    /// `c`: full-width katakana to full-width hiragana
    KatakanaToHiragana,
    /// `C`: full-width hiragana to full-width katakana
    HiraganaToKatakana,
}

/// Converted bytes for one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// A single character computed by offset arithmetic
    Char(char),
    /// A table entry
    Bytes(&'static [u8]),
}

impl Replacement {
    /// Append the encoded replacement to `out`
    pub fn write_to<E: Extend<u8>>(&self, out: &mut E) {
        match *self {
            Replacement::Char(ch) => {
                let mut buf = [0u8; 4];
                out.extend(ch.encode_utf8(&mut buf).bytes());
            }
            Replacement::Bytes(bytes) => out.extend(bytes.iter().copied()),
        }
    }
}

/// Result of offering a unit to a directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The unit is outside the directive's category
    NotEligible,
    /// The unit is in the category but has no counterpart
    Unmapped,
    /// The unit converts to the given replacement
    Converted(Replacement),
}

impl Directive {
    /// All directives in canonical order
    pub const ALL: [Directive; 14] = [
        Directive::NarrowLatin,
        Directive::WideLatin,
        Directive::NarrowDigit,
        Directive::WideDigit,
        Directive::NarrowAlphanumeric,
        Directive::WideAlphanumeric,
        Directive::NarrowSpace,
        Directive::WideSpace,
        Directive::NarrowKatakana,
        Directive::WideKatakana,
        Directive::NarrowHiragana,
        Directive::WideHiragana,
        Directive::KatakanaToHiragana,
        Directive::HiraganaToKatakana,
    ];

    /// Directive named by `letter`, if any
    pub fn from_char(letter: char) -> Option<Self> {
        Some(match letter {
            'r' => Directive::NarrowLatin,
            'R' => Directive::WideLatin,
            'n' => Directive::NarrowDigit,
            'N' => Directive::WideDigit,
            'a' => Directive::NarrowAlphanumeric,
            'A' => Directive::WideAlphanumeric,
            's' => Directive::NarrowSpace,
            'S' => Directive::WideSpace,
            'k' => Directive::NarrowKatakana,
            'K' => Directive::WideKatakana,
            'h' => Directive::NarrowHiragana,
            'H' => Directive::WideHiragana,
            'c' => Directive::KatakanaToHiragana,
            'C' => Directive::HiraganaToKatakana,
            _ => return None,
        })
    }

    /// The letter naming this directive
    pub fn as_char(self) -> char {
        match self {
            Directive::NarrowLatin => 'r',
            Directive::WideLatin => 'R',
            Directive::NarrowDigit => 'n',
            Directive::WideDigit => 'N',
            Directive::NarrowAlphanumeric => 'a',
            Directive::WideAlphanumeric => 'A',
            Directive::NarrowSpace => 's',
            Directive::WideSpace => 'S',
            Directive::NarrowKatakana => 'k',
            Directive::WideKatakana => 'K',
            Directive::NarrowHiragana => 'h',
            Directive::WideHiragana => 'H',
            Directive::KatakanaToHiragana => 'c',
            Directive::HiraganaToKatakana => 'C',
        }
    }

    /// Direction of the conversion; the letter case encodes it
    pub fn direction(self) -> Direction {
        if self.as_char().is_ascii_lowercase() {
            Direction::Narrow
        } else {
            Direction::Wide
        }
    }

    /// Category the directive pair operates on
    pub fn category(self) -> Category {
        match self {
            Directive::NarrowLatin | Directive::WideLatin => Category::Latin,
            Directive::NarrowDigit | Directive::WideDigit => Category::Digit,
            Directive::NarrowAlphanumeric | Directive::WideAlphanumeric => Category::Alphanumeric,
            Directive::NarrowSpace | Directive::WideSpace => Category::Space,
            Directive::NarrowKatakana | Directive::WideKatakana => Category::Katakana,
            Directive::NarrowHiragana | Directive::WideHiragana => Category::Hiragana,
            Directive::KatakanaToHiragana | Directive::HiraganaToKatakana => Category::Script,
        }
    }

    /// Human-readable summary used by listings
    pub fn description(self) -> &'static str {
        match self {
            Directive::NarrowLatin => "full-width Latin letters to half-width",
            Directive::WideLatin => "half-width Latin letters to full-width",
            Directive::NarrowDigit => "full-width digits to half-width",
            Directive::WideDigit => "half-width digits to full-width",
            Directive::NarrowAlphanumeric => {
                "full-width letters, digits and punctuation to half-width"
            }
            Directive::WideAlphanumeric => {
                "half-width letters, digits and punctuation to full-width"
            }
            Directive::NarrowSpace => "full-width space to half-width",
            Directive::WideSpace => "half-width space to full-width",
            Directive::NarrowKatakana => "full-width katakana to half-width",
            Directive::WideKatakana => "half-width katakana to full-width",
            Directive::NarrowHiragana => "full-width hiragana to half-width katakana",
            Directive::WideHiragana => "half-width katakana to full-width hiragana",
            Directive::KatakanaToHiragana => "full-width katakana to full-width hiragana",
            Directive::HiraganaToKatakana => "full-width hiragana to full-width katakana",
        }
    }

    /// Whether a unit with `flags` falls in this directive's category
    pub fn matches(self, flags: CategoryFlags) -> bool {
        use CategoryFlags as F;

        let (width, any) = match self {
            Directive::NarrowLatin => (F::FULL, F::UPPER | F::LOWER),
            Directive::WideLatin => (F::HALF, F::UPPER | F::LOWER),
            Directive::NarrowDigit => (F::FULL, F::DIGIT),
            Directive::WideDigit => (F::HALF, F::DIGIT),
            Directive::NarrowAlphanumeric => (F::FULL, F::PRINTABLE),
            Directive::WideAlphanumeric => (F::HALF, F::PRINTABLE),
            Directive::NarrowSpace => (F::FULL, F::SPACE),
            Directive::WideSpace => (F::HALF, F::SPACE),
            Directive::NarrowKatakana => (F::FULL, F::KATAKANA | F::KANA_MARK),
            Directive::WideKatakana => (F::HALF, F::KATAKANA | F::KANA_MARK),
            Directive::NarrowHiragana => (F::FULL, F::HIRAGANA | F::KANA_MARK),
            Directive::WideHiragana => (F::HALF, F::KATAKANA | F::KANA_MARK),
            Directive::KatakanaToHiragana => (F::FULL, F::KATAKANA),
            Directive::HiraganaToKatakana => (F::FULL, F::HIRAGANA),
        };
        flags.contains(width) && flags.intersects(any)
    }

    /// Offer a classified unit to this directive
    pub fn apply(self, unit: &[u8], flags: CategoryFlags) -> Outcome {
        if !self.matches(flags) {
            return Outcome::NotEligible;
        }

        let converted = match self.category() {
            Category::Latin | Category::Digit | Category::Alphanumeric | Category::Space => {
                single_char(unit)
                    .and_then(|ch| match self.direction() {
                        Direction::Narrow => width::narrow(ch),
                        Direction::Wide => width::widen(ch),
                    })
                    .map(Replacement::Char)
            }
            Category::Katakana | Category::Hiragana | Category::Script => {
                let lookup: fn(&[u8]) -> Option<&'static [u8]> = match self {
                    Directive::NarrowKatakana | Directive::NarrowHiragana => {
                        tables::lookup_half_width
                    }
                    Directive::WideKatakana => tables::lookup_full_width_katakana,
                    Directive::WideHiragana => tables::lookup_full_width_hiragana,
                    Directive::KatakanaToHiragana => tables::lookup_hiragana,
                    _ => tables::lookup_katakana,
                };
                lookup(unit).map(Replacement::Bytes)
            }
        };

        converted.map_or(Outcome::Unmapped, Outcome::Converted)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

fn single_char(unit: &[u8]) -> Option<char> {
    let mut chars = core::str::from_utf8(unit).ok()?.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Ordered, de-duplicated list of directives
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Mode {
    directives: SmallVec<[Directive; 14]>,
}

impl Mode {
    /// Parse a mode string, ignoring letters that name no directive
    pub fn parse(mode: &str) -> Self {
        Self::from_directives(mode.chars().filter_map(Directive::from_char))
    }

    /// Build a mode from directives, keeping the first occurrence of each
    pub fn from_directives<I: IntoIterator<Item = Directive>>(directives: I) -> Self {
        let mut mode = Self::default();
        for directive in directives {
            if !mode.contains(directive) {
                mode.directives.push(directive);
            }
        }
        mode
    }

    /// Directives in application order
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Iterate directives in application order
    pub fn iter(&self) -> impl Iterator<Item = Directive> + '_ {
        self.directives.iter().copied()
    }

    /// Whether `directive` is part of this mode
    pub fn contains(&self, directive: Directive) -> bool {
        self.directives.contains(&directive)
    }

    /// Number of distinct directives
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// True for the no-op mode
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    /// Strict parse: any letter that names no directive is an error
    fn from_str(mode: &str) -> Result<Self> {
        for (position, letter) in mode.chars().enumerate() {
            if Directive::from_char(letter).is_none() {
                return Err(ModeError::UnknownDirective { letter, position });
            }
        }
        Ok(Self::parse(mode))
    }
}

impl TryFrom<String> for Mode {
    type Error = ModeError;

    fn try_from(mode: String) -> Result<Self> {
        mode.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.to_string()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for directive in &self.directives {
            write!(f, "{directive}")?;
        }
        Ok(())
    }
}
