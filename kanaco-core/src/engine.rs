//! Conversion engine

use crate::classifier::{classify, CategoryFlags};
use crate::directive::Mode;
use crate::pipeline::{convert_unit, Conversion};
use crate::scanner::UnitScanner;

/// Reusable converter for one mode
///
/// Parsing the mode string is the only per-call setup, so callers that
/// convert many inputs with the same mode should keep a `Converter` around.
/// It holds no mutable state and can be shared between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Converter {
    mode: Mode,
}

impl Converter {
    /// Create a converter, ignoring letters that name no directive
    pub fn new(mode: &str) -> Self {
        Self::from_mode(Mode::parse(mode))
    }

    /// Create a converter from an already parsed mode
    pub fn from_mode(mode: Mode) -> Self {
        Self { mode }
    }

    /// The mode this converter applies
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Convert `input`, returning a new buffer
    pub fn convert_bytes(&self, input: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(input.len());
        self.convert_into(input, &mut output);
        output
    }

    /// Convert `input`, appending to `output`
    pub fn convert_into(&self, input: &[u8], output: &mut Vec<u8>) {
        if self.mode.is_empty() {
            output.extend_from_slice(input);
            return;
        }

        output.reserve(input.len());
        for unit in UnitScanner::new(input) {
            match convert_unit(&self.mode, unit.bytes) {
                Some(conversion) => output.extend_from_slice(&conversion.bytes),
                None => output.extend_from_slice(unit.bytes),
            }
        }
    }

    /// Convert a string
    pub fn convert_str(&self, input: &str) -> String {
        let bytes = self.convert_bytes(input.as_bytes());
        // Valid input only ever maps to valid output
        String::from_utf8(bytes)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }

    /// Report how each unit of `input` is classified and converted
    pub fn inspect<'a>(&'a self, input: &'a [u8]) -> impl Iterator<Item = UnitReport<'a>> + 'a {
        UnitScanner::new(input).map(move |unit| UnitReport {
            offset: unit.offset,
            bytes: unit.bytes,
            flags: classify(unit.bytes),
            conversion: convert_unit(&self.mode, unit.bytes),
        })
    }
}

/// Classification and conversion of one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReport<'a> {
    /// Byte offset within the inspected input
    pub offset: usize,
    /// Input bytes of the unit
    pub bytes: &'a [u8],
    /// Category flags of the input unit
    pub flags: CategoryFlags,
    /// The rewrite, or `None` if the unit passes through
    pub conversion: Option<Conversion>,
}

impl UnitReport<'_> {
    /// Bytes emitted for this unit
    pub fn output(&self) -> &[u8] {
        match &self.conversion {
            Some(conversion) => &conversion.bytes,
            None => self.bytes,
        }
    }

    /// Whether a directive changed the unit
    pub fn is_converted(&self) -> bool {
        self.conversion
            .as_ref()
            .is_some_and(|c| c.bytes.as_slice() != self.bytes)
    }
}

/// Convert `input` with a mode string
///
/// Unknown mode letters are ignored and an empty mode returns a copy of the
/// input. Never fails: bytes that are not part of the convertible
/// repertoire, including malformed UTF-8, are copied through unchanged.
pub fn transform_bytes(input: &[u8], mode: &str) -> Vec<u8> {
    Converter::new(mode).convert_bytes(input)
}

/// Convert a string with a mode string
pub fn transform_string(input: &str, mode: &str) -> String {
    Converter::new(mode).convert_str(input)
}
