//! seqagg - sum and maximum over fixed integer sequences
//!
//! Prints the numbers and names being worked on, then the sum and the
//! maximum of the numbers.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Invalid or unparsable arguments, config write failure, or empty numbers

use anyhow::{Context, Result};
use seqagg::cli::{Args, OutputFormat};
use seqagg::config::{Config, DEFAULT_CONFIG_FILE};
use seqagg::report;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args)?;

    info!("seqagg v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(&args) {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("Aggregation failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .seqagg.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            DEFAULT_CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("Created {} with the built-in data.", DEFAULT_CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// `RUST_LOG` takes precedence over `--verbose`/`--quiet`. Logs go to
/// stderr; stdout carries only the report.
fn init_logging(args: &Args) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(args.log_level()).into())
    });

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Load data, aggregate it and render the report in the configured format.
fn run(args: &Args) -> Result<String> {
    let (mut config, mut source) = load_config(args)?;
    config.merge_with_args(args);

    if args.numbers.is_some() || args.names.is_some() {
        source = "cli".to_string();
    }

    let (numbers, names) = config.data.sequences();
    debug!(
        "Loaded {} numbers and {} names from {}",
        numbers.len(),
        names.len(),
        source
    );

    let report = report::build_report(numbers, names, source)?;

    match config.output.format {
        OutputFormat::Text => report::generate_text_report(&report),
        OutputFormat::Json => Ok(format!("{}\n", report::generate_json_report(&report)?)),
    }
}

/// Load configuration from file or use defaults.
///
/// Returns the config together with a label for where the data came from.
fn load_config(args: &Args) -> Result<(Config, String)> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        let config = Config::load(config_path)?;
        return Ok((config, config_path.display().to_string()));
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", DEFAULT_CONFIG_FILE);
            Ok((config, DEFAULT_CONFIG_FILE.to_string()))
        }
        Ok(None) => {
            debug!("No config file found, using built-in data");
            Ok((Config::default(), "built-in".to_string()))
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok((Config::default(), "built-in".to_string()))
        }
    }
}
