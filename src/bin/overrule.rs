//! Overrule CLI Binary
//!
//! Loads the application settings file and prints the bound resize widths.

use clap::Parser;
use overrule::config::{AppConfig, ConfigLoader};
use overrule::error::BindError;
use overrule::logging::{init_logging, LoggingConfig};
use overrule::views::join_delimited;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// Overrule CLI - configuration binding with all-or-nothing default overrides
#[derive(Parser)]
#[command(name = "overrule")]
#[command(about = "Loads application settings and prints the bound resize widths")]
struct Cli {
    /// Base directory for settings file resolution
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Settings file path (overrides default settings resolution)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    log_format: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and settings file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Overrule CLI starting");

    let config = match load_config(&cli) {
        Ok(config) => {
            info!("Settings loaded");
            config
        }
        Err(e) => {
            error!("Error loading settings: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(errors) = config.validate() {
        for e in &errors {
            error!("Validation failed: {}", e);
            eprintln!("{}", e);
        }
        process::exit(1);
    }

    info!(
        overridden = config.image_processing.resize_widths.is_overridden(),
        count = config.image_processing.resize_widths.len(),
        "Resize widths bound"
    );

    println!(
        "{}",
        join_delimited(config.image_processing.resize_widths.iter(), ",")
    );
}

fn load_config(cli: &Cli) -> Result<AppConfig, BindError> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(&cli.dir),
    }
}

/// Build logging configuration from CLI args, environment, and settings file
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    // If --verbose is not set, disable logging
    if !cli.verbose {
        let mut config = LoggingConfig::default();
        config.level = "off".to_string();
        return config;
    }

    // Try to load the settings file first
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default(),
        None => ConfigLoader::load(&cli.dir)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default(),
    };

    // Override with CLI arguments (highest priority)
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
