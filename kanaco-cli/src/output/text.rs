//! Plain text output formatter

use super::{display_bytes, hex_bytes, OutputFormatter};
use anyhow::Result;
use kanaco_core::UnitReport;
use std::io::{self, Write};

/// Plain text formatter - outputs one line per unit
pub struct TextFormatter<W: Write> {
    writer: W,
    units: usize,
    converted: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            units: 0,
            converted: 0,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_unit(&mut self, report: &UnitReport<'_>) -> Result<()> {
        self.units += 1;

        let result = match &report.conversion {
            Some(conversion) if report.is_converted() => {
                self.converted += 1;
                let applied: String = conversion.applied.iter().map(|d| d.as_char()).collect();
                format!("-> {} ({applied})", display_bytes(&conversion.bytes))
            }
            _ => "=".to_string(),
        };

        writeln!(
            self.writer,
            "{:>6}  {:<4}  {:<17}  {:<28}  {}",
            report.offset,
            display_bytes(report.bytes),
            hex_bytes(report.bytes),
            report.flags.to_string(),
            result
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "units: {}, converted: {}", self.units, self.converted)?;
        self.writer.flush()?;
        Ok(())
    }
}
