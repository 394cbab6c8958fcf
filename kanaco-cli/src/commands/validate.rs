//! Validate command implementation

use crate::config::{parse_mode, CliConfig};
use anyhow::Result;
use clap::{ArgGroup, Args};
use kanaco_core::Mode;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).multiple(true).args(["mode", "config"])))]
pub struct ValidateArgs {
    /// Mode string to check strictly
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Configuration file to check
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        if let Some(path) = &self.config {
            println!("Validating configuration: {}", path.display());
            let checked = CliConfig::from_file(path).and_then(|config| {
                let mode = config.validate()?;
                Ok((config, mode))
            });
            match checked {
                Ok((config, mode)) => {
                    println!("✓ Configuration is valid!");
                    println!("  Output format: {:?}", config.output.format);
                    print_mode(&mode);
                }
                Err(e) => {
                    println!("✗ Configuration is invalid!");
                    println!("  Error: {e}");
                    return Err(anyhow::anyhow!("Validation failed: {}", e));
                }
            }
        }

        if let Some(mode) = &self.mode {
            println!("Validating mode: {mode:?}");
            match parse_mode(mode, true) {
                Ok(mode) => {
                    println!("✓ Mode is valid!");
                    print_mode(&mode);
                }
                Err(e) => {
                    println!("✗ Mode is invalid!");
                    println!("  Error: {e}");
                    return Err(anyhow::anyhow!("Validation failed: {}", e));
                }
            }
        }

        Ok(())
    }
}

fn print_mode(mode: &Mode) {
    if mode.is_empty() {
        println!("  Mode: (empty, input is copied unchanged)");
        return;
    }
    println!("  Mode: {mode}");
    for directive in mode.iter() {
        println!("    {directive}  {}", directive.description());
    }
}
