//! Inspect command implementation

use crate::config::CliConfig;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use anyhow::Result;
use clap::Args;
use kanaco_core::Converter;
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Text to inspect
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Mode letters to apply (see `kanaco list directives`)
    #[arg(short, long, value_name = "MODE", env = "KANACO_MODE")]
    pub mode: Option<String>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Reject unknown mode letters
    #[arg(long)]
    pub strict: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        self.write_report(io::stdout().lock())
    }

    /// Write the unit report for the text to `writer`
    pub fn write_report<W: Write>(&self, writer: W) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let mode = config.resolve_mode(self.mode.as_deref(), self.strict)?;
        let converter = Converter::from_mode(mode);
        let format = self.format.unwrap_or(config.output.format);
        debug!("Inspecting {} bytes as {format:?}", self.text.len());

        let text = self.text.as_bytes();
        match format {
            OutputFormat::Text => report_units(&converter, text, TextFormatter::new(writer)),
            OutputFormat::Json => report_units(
                &converter,
                text,
                JsonFormatter::new(writer, config.output.pretty_json),
            ),
        }
    }
}

fn report_units<F: OutputFormatter>(
    converter: &Converter,
    text: &[u8],
    mut formatter: F,
) -> Result<()> {
    for report in converter.inspect(text) {
        formatter.format_unit(&report)?;
    }
    formatter.finish()
}
