//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// seqagg - sum and maximum over fixed integer sequences
///
/// With no arguments, prints the built-in numbers and names followed by
/// the sum and the maximum of the numbers.
///
/// Examples:
///   seqagg
///   seqagg --numbers 5,3,5,1
///   seqagg --config data.toml --format json
///   seqagg --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file
    ///
    /// If not specified, looks for .seqagg.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Numbers to aggregate (comma-separated)
    ///
    /// Example: --numbers 5,3,5,1
    #[arg(long, value_name = "INTS", value_delimiter = ',', allow_hyphen_values = true)]
    pub numbers: Option<Vec<i32>>,

    /// Names to display (comma-separated)
    ///
    /// Example: --names Alice,Bob,Charlie
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    /// Output format (text, json)
    ///
    /// Can also be set via SEQAGG_FORMAT env var or .seqagg.toml config.
    #[arg(long, value_name = "FORMAT", env = "SEQAGG_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .seqagg.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    clap::ValueEnum,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Four plain lines (default)
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

impl Args {
    /// Parse command-line arguments.
    ///
    /// Usage errors exit with status 1; `--help` and `--version` exit 0.
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(e) if e.use_stderr() => {
                let _ = e.print();
                std::process::exit(1);
            }
            Err(e) => e.exit(),
        }
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.init_config && (self.numbers.is_some() || self.names.is_some()) {
            return Err("--init-config cannot be combined with --numbers or --names".to_string());
        }

        if let Some(ref names) = self.names {
            if names.is_empty() || names.iter().any(|name| name.trim().is_empty()) {
                return Err("--names must not contain empty labels".to_string());
            }
        }

        if let Some(ref config_path) = self.config {
            if !config_path.is_file() {
                return Err(format!(
                    "Config file does not exist: {}",
                    config_path.display()
                ));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            config: None,
            numbers: None,
            names: None,
            format: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_no_arguments_is_valid() {
        let args = Args::try_parse_from(["seqagg"]).unwrap();
        assert!(args.validate().is_ok());
        assert!(args.numbers.is_none());
        assert!(args.names.is_none());
    }

    #[test]
    fn test_parse_comma_separated_numbers() {
        let args = Args::try_parse_from(["seqagg", "--numbers", "5,-3,5,1"]).unwrap();
        assert_eq!(args.numbers, Some(vec![5, -3, 5, 1]));
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        assert!(Args::try_parse_from(["seqagg", "--numbers", "1,two"]).is_err());
    }

    #[test]
    fn test_parse_format() {
        let args = Args::try_parse_from(["seqagg", "--format", "json"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_missing_config() {
        let mut args = make_args();
        args.config = Some(PathBuf::from("/nonexistent/seqagg.toml"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_init_config_with_data() {
        let mut args = make_args();
        args.init_config = true;
        args.numbers = Some(vec![1]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_empty_label() {
        let args = Args::try_parse_from(["seqagg", "--names", "Alice,,Bob"]).unwrap();
        assert!(args.validate().is_err());

        let args = Args::try_parse_from(["seqagg", "--names", ""]).unwrap();
        assert!(args.validate().is_err());

        let args = Args::try_parse_from(["seqagg", "--names", "Alice,Bob"]).unwrap();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::WARN);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
