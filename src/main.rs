// Binary entry point - import modules directly
mod cli;
mod commands;
mod config;
mod core;
mod source;
mod utils;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use utils::{handle_flow, report_error};

fn init_logging(debug: bool) -> Result<()> {
    let default_level = if debug { "feedback_analyzer=debug" } else { "feedback_analyzer=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;

    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);

    // Ensure configuration exists and load it
    let loaded = if cli.config.is_none() {
        Config::ensure_config_exists().and_then(|_| Config::load())
    } else {
        Config::load_custom(&config_path)
    };

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    };

    if !config.general.color {
        colored::control::set_override(false);
    }

    match cli.command.execute(config, config_path) {
        Ok(flow) => handle_flow(flow),
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    }

    Ok(())
}
