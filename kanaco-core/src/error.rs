//! Core error types
//!
//! Conversion itself never fails; the only fallible operation is strict
//! mode parsing.

use thiserror::Error;

/// Errors raised while parsing a mode string strictly
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// A letter that names no directive
    #[error("unknown directive '{letter}' at position {position}")]
    UnknownDirective {
        /// The offending character
        letter: char,
        /// Character index within the mode string
        position: usize,
    },
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, ModeError>;
