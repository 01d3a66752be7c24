//! Logging initialization
//!
//! Console-only logging via `simplelog`. The bot keeps no files around, so
//! everything goes to stdout and whatever supervises the process captures
//! it. Fatal configuration problems are logged through the same channel
//! before the process exits.

use std::env;

use anyhow::Result;
use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

/// Initialize the stdout logger
///
/// The level comes from the LOG_LEVEL environment variable
/// ("error", "warn", "info", "debug", "trace"). Default: debug.
pub fn init_logger() -> Result<()> {
    let level = env::var("LOG_LEVEL")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Debug);

    TermLogger::init(level, simplelog::Config::default(), TerminalMode::Stdout, ColorChoice::Auto)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}
