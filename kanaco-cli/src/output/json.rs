//! JSON output formatter

use super::{hex_bytes, OutputFormatter};
use anyhow::Result;
use kanaco_core::UnitReport;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs units as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    units: Vec<UnitData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitData {
    /// Byte offset in the inspected text
    pub offset: usize,
    /// Input unit text
    pub input: String,
    /// Input bytes as hex
    pub bytes: String,
    /// Category flag names
    pub flags: Vec<String>,
    /// Emitted unit text
    pub output: String,
    /// Letters of the directives that fired, in order
    pub directives: String,
}

impl From<&UnitReport<'_>> for UnitData {
    fn from(report: &UnitReport<'_>) -> Self {
        Self {
            offset: report.offset,
            input: String::from_utf8_lossy(report.bytes).into_owned(),
            bytes: hex_bytes(report.bytes),
            flags: report.flags.names().collect(),
            output: String::from_utf8_lossy(report.output()).into_owned(),
            directives: report
                .conversion
                .iter()
                .flat_map(|c| c.applied.iter().map(|d| d.as_char()))
                .collect(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            units: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_unit(&mut self, report: &UnitReport<'_>) -> Result<()> {
        self.units.push(UnitData::from(report));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.units)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.units)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
