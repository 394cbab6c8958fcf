//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use kanaco_core::Directive;
use std::io::{self, Write};

pub mod convert;
pub mod generate_config;
pub mod inspect;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert text, files or standard input
    Convert(convert::ConvertArgs),

    /// Show how each character is classified and converted
    Inspect(inspect::InspectArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a mode string or configuration file
    Validate(validate::ValidateArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List the mode letters
    Directives,

    /// List inspect output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Convert(args) => args.execute(quiet),
            Commands::Inspect(args) => args.execute(),
            Commands::List { subcommand } => subcommand.write_to(&mut io::stdout().lock()),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Write the listing to `out`
    pub fn write_to(self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Directives => {
                writeln!(out, "Mode letters (applied in the order given):")?;
                for directive in Directive::ALL {
                    writeln!(out, "  {}  {}", directive, directive.description())?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Inspect output formats:")?;
                for (name, description) in OutputFormat::descriptions() {
                    writeln!(out, "  {name:<6}{description}")?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}
