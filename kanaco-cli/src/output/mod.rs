//! Output formatting module

use anyhow::Result;
use kanaco_core::UnitReport;
use serde::{Deserialize, Serialize};

/// Trait for unit report formatters
pub trait OutputFormatter {
    /// Format and output the report for a single unit
    fn format_unit(&mut self, report: &UnitReport<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One aligned line per unit
    #[default]
    Text,
    /// JSON array of unit records
    Json,
}

impl OutputFormat {
    /// All formats with a short description, for listings
    pub fn descriptions() -> [(&'static str, &'static str); 2] {
        [
            ("text", "One line per unit: offset, bytes, flags and result"),
            ("json", "JSON array of unit records"),
        ]
    }
}

/// Hex dump of a unit's bytes
pub(crate) fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Printable rendering of a unit
pub(crate) fn display_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).escape_debug().to_string()
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
