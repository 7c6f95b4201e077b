//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.seqagg.toml` files.

use crate::cli::{Args, OutputFormat};
use crate::models::{NamedSequence, NumericSequence, BUILTIN_NAMES, BUILTIN_NUMBERS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".seqagg.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input sequences.
    #[serde(default)]
    pub data: DataConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// The sequences to display and aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Integers to sum and scan for a maximum.
    #[serde(default = "default_numbers")]
    pub numbers: Vec<i32>,

    /// Labels echoed alongside the numbers.
    #[serde(default = "default_names")]
    pub names: Vec<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            numbers: default_numbers(),
            names: default_names(),
        }
    }
}

fn default_numbers() -> Vec<i32> {
    BUILTIN_NUMBERS.to_vec()
}

fn default_names() -> Vec<String> {
    BUILTIN_NAMES.iter().map(|s| s.to_string()).collect()
}

impl DataConfig {
    /// Freeze the configured data into fixed-length sequences.
    pub fn sequences(&self) -> (NumericSequence, NamedSequence) {
        (
            NumericSequence::from(self.numbers.clone()),
            NamedSequence::new(self.names.iter().cloned()),
        )
    }
}

/// Report output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.seqagg.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(DEFAULT_CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were actually given.
    pub fn merge_with_args(&mut self, args: &Args) {
        if let Some(ref numbers) = args.numbers {
            self.data.numbers = numbers.clone();
        }
        if let Some(ref names) = args.names {
            self.data.names = names.clone();
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
