//! Contact Assistant - Main entry point
//!
//! Reads commands from stdin, one per line, and prints replies to stdout.
//! Logs go to stderr.

use anyhow::{Context, Result};
use contact_assistant::{assistant, Assistant, Config};
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over the configured level
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(path) = &config.env_file {
        warn!(path = %path.display(), "Loaded settings from .env file");
    }

    if let Some(today) = config.today {
        info!(%today, "Using pinned date for birthday reports");
    }

    let mut assistant = Assistant::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    assistant::run(&mut assistant, stdin.lock(), &mut stdout, &config.prompt)
        .context("Failed to read or write the terminal")?;

    Ok(())
}
