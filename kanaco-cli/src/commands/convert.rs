//! Convert command implementation

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use kanaco_core::Converter;
use kanaco_stream::KanaReader;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Mode letters to apply (see `kanaco list directives`)
    #[arg(short, long, value_name = "MODE", env = "KANACO_MODE")]
    pub mode: Option<String>,

    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Convert this text instead of reading input
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Reject unknown mode letters
    #[arg(long)]
    pub strict: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let mode = config.resolve_mode(self.mode.as_deref(), self.strict)?;
        let converter = Converter::from_mode(mode);

        info!("Converting with mode '{}'", converter.mode());
        debug!("Arguments: {self:?}");

        let mut writer = self.open_output()?;

        if let Some(text) = &self.text {
            let converted = converter.convert_bytes(text.as_bytes());
            writer.write_all(&converted)?;
            if !converted.ends_with(b"\n") {
                writer.write_all(b"\n")?;
            }
        } else if self.input.is_empty() {
            debug!("Reading from stdin");
            convert_stream(io::stdin().lock(), &converter, writer.as_mut())
                .context("Failed to convert stdin")?;
        } else {
            self.convert_files(&converter, writer.as_mut(), quiet)?;
        }

        writer.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn convert_files(
        &self,
        converter: &Converter,
        writer: &mut dyn Write,
        quiet: bool,
    ) -> Result<()> {
        let files = resolve_patterns(&self.input)?;
        info!("Found {} file(s) to convert", files.len());

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            debug!(
                "Converting {} ({} bytes)",
                path.display(),
                FileReader::file_size(path)?
            );
            let reader = FileReader::open(path)?;
            let lines = convert_stream(reader, converter, writer)
                .with_context(|| format!("Failed to convert {}", path.display()))?;
            debug!("{}: {} lines", path.display(), lines);

            let name = path.file_name().unwrap_or(path.as_os_str());
            progress.file_completed(&name.to_string_lossy());
        }

        progress.finish();
        Ok(())
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }
}

/// Stream `reader` through the converter line by line, returning the line count
fn convert_stream<R: BufRead>(
    reader: R,
    converter: &Converter,
    writer: &mut dyn Write,
) -> Result<u64> {
    let mut reader = KanaReader::with_converter(reader, converter.clone());
    io::copy(&mut reader, writer)?;
    Ok(reader.lines_read())
}
