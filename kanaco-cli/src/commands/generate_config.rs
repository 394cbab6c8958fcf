//! Generate config command implementation

use crate::config::{parse_mode, DEFAULT_CONFIG_FILE};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub output: PathBuf,

    /// Mode to write into the template
    #[arg(short, long, value_name = "MODE", default_value = "")]
    pub mode: String,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        parse_mode(&self.mode, true)?;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the mode letters (see `kanaco list directives`)");
        println!("2. Validate your configuration:");
        println!("   kanaco validate --config {}", self.output.display());
        println!("3. Use it for conversion:");
        println!(
            "   kanaco convert -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# kanaco configuration

[conversion]
# Mode letters, applied in the order given:
#   r/R  Latin letters to half/full width
#   n/N  digits to half/full width
#   a/A  letters, digits and punctuation to half/full width
#   s/S  space to half/full width
#   k/K  katakana to half/full width
#   h/H  hiragana to half-width katakana / half-width katakana to hiragana
#   c/C  katakana to hiragana / hiragana to katakana
# A mode given on the command line or in KANACO_MODE takes precedence.
mode = "{}"

# Reject unknown mode letters instead of ignoring them
strict = false

[output]
# Default format for `kanaco inspect`: "text" or "json"
format = "text"

# Pretty print JSON output
pretty_json = true
"#,
            self.mode
        )
    }
}
