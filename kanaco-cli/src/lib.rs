//! kanaco CLI library
//!
//! Command implementations for the `kanaco` binary, which converts Japanese
//! text between half-width and full-width forms and between hiragana and
//! katakana.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
