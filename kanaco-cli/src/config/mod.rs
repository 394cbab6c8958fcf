//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use kanaco_core::Mode;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "kanaco.toml";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Conversion configuration
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConversionConfig {
    /// Mode string used when none is given on the command line
    pub mode: String,

    /// Reject unknown mode letters instead of ignoring them
    pub strict: bool,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format for `inspect`
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {e}", path.display()))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else `kanaco.toml` if present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    /// Pick the mode to apply
    ///
    /// `requested` (command line or `KANACO_MODE`) wins over the configured
    /// mode. Strict parsing is used when either `strict` or the configuration
    /// asks for it.
    pub fn resolve_mode(&self, requested: Option<&str>, strict: bool) -> Result<Mode> {
        let source = requested.unwrap_or(&self.conversion.mode);
        parse_mode(source, strict || self.conversion.strict)
    }

    /// Check values that deserialization alone does not validate
    pub fn validate(&self) -> Result<Mode> {
        parse_mode(&self.conversion.mode, true)
    }
}

/// Parse a mode string, strictly or leniently
pub fn parse_mode(source: &str, strict: bool) -> Result<Mode> {
    if strict {
        return source
            .parse::<Mode>()
            .map_err(|e| CliError::InvalidMode(e.to_string()).into());
    }

    let mode = Mode::parse(source);
    if mode.len() < source.chars().count() {
        warn!("Ignoring unknown or repeated letters in mode '{source}' (using '{mode}')");
    }
    Ok(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.conversion.mode, "");
        assert!(!config.conversion.strict);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = write_config("[conversion]\nmode = \"rnK\"\n");
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.conversion.mode, "rnK");
        assert!(!config.conversion.strict);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r#"
[conversion]
mode = "asK"
strict = true

[output]
format = "json"
pretty_json = false
"#,
        );
        let config = CliConfig::from_file(file.path()).unwrap();
        assert!(config.conversion.strict);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let file = write_config("[output]\nformat = \"yaml\"\n");
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/kanaco.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_resolve_mode_precedence() {
        let config = CliConfig {
            conversion: ConversionConfig {
                mode: "K".to_string(),
                strict: false,
            },
            ..Default::default()
        };
        assert_eq!(config.resolve_mode(None, false).unwrap().to_string(), "K");
        assert_eq!(config.resolve_mode(Some("rn"), false).unwrap().to_string(), "rn");
        assert_eq!(config.resolve_mode(Some(""), false).unwrap().to_string(), "");
    }

    #[test]
    fn test_resolve_mode_strictness() {
        let lenient = CliConfig::default();
        assert_eq!(lenient.resolve_mode(Some("rxn"), false).unwrap().to_string(), "rn");
        assert!(lenient.resolve_mode(Some("rxn"), true).is_err());

        let strict = CliConfig {
            conversion: ConversionConfig {
                mode: String::new(),
                strict: true,
            },
            ..Default::default()
        };
        let err = strict.resolve_mode(Some("rxn"), false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid mode: unknown directive 'x' at position 1"
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CliConfig {
            conversion: ConversionConfig {
                mode: "hc".to_string(),
                strict: true,
            },
            output: OutputConfig {
                format: OutputFormat::Json,
                pretty_json: false,
            },
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<CliConfig>(&text).unwrap(), config);
    }
}
