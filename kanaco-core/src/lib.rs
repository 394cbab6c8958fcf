//! Half-width/full-width and hiragana/katakana conversion for Japanese text
//!
//! Conversion is driven by a mode string of single-letter directives. Each
//! letter pair covers one category; the lower-case letter converts towards
//! the narrow form and the upper-case letter towards the wide form:
//!
//! | letters | category |
//! |---|---|
//! | `r` / `R` | Latin letters |
//! | `n` / `N` | digits |
//! | `a` / `A` | letters, digits and punctuation |
//! | `s` / `S` | space |
//! | `k` / `K` | katakana width |
//! | `h` / `H` | full-width hiragana ↔ half-width katakana |
//! | `c` / `C` | full-width katakana ↔ full-width hiragana |
//!
//! Input is processed one unit at a time. A half-width kana followed by a
//! half-width sound mark (`ｶﾞ`, `ﾊﾟ`) forms a single unit, so one input
//! character always produces one output character.
//!
//! # Example
//!
//! ```rust
//! use kanaco_core::{transform_string, Converter};
//!
//! assert_eq!(transform_string("aＡ1１ｶﾞガ", "rnK"), "aA11ガガ");
//!
//! // Reuse the parsed mode across calls
//! let converter = Converter::new("KV");
//! assert_eq!(converter.mode().to_string(), "K");
//! assert_eq!(converter.convert_str("ﾃﾞｰﾀ"), "データ");
//! ```
//!
//! Conversion never fails. Unknown mode letters are ignored and bytes
//! outside the convertible repertoire, including malformed UTF-8, are
//! copied through unchanged. Use [`Mode`]'s `FromStr` implementation to
//! reject unknown letters instead.

pub mod classifier;
pub mod directive;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod scanner;
pub mod tables;
pub mod width;

pub use classifier::{classify, CategoryFlags, Voicing, Width};
pub use directive::{Category, Direction, Directive, Mode};
pub use engine::{transform_bytes, transform_string, Converter, UnitReport};
pub use error::{ModeError, Result};
pub use scanner::{scan_unit, CodeUnit, UnitScanner};
