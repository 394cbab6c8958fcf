//! kanaco command-line entry point

use anyhow::Result;
use clap::Parser;
use kanaco_cli::commands::Commands;
use kanaco_cli::logging::init_logging;

/// Convert Japanese text between half-width and full-width forms and
/// between hiragana and katakana
#[derive(Debug, Parser)]
#[command(name = "kanaco", version, about, long_about = None, propagate_version = true)]
struct Cli {
    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    log::debug!("{:?}", cli.command);
    cli.command.execute(cli.quiet)
}
