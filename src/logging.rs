//! File logging.
//!
//! The terminal belongs to the TUI, so log output goes to
//! `<data_dir>/fetch-dogs.log` instead of stderr.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, DEFAULT_LOG_FILTER};

/// Install the global subscriber, appending to the configured log file.
pub fn init_logging(config: &Config) -> Result<()> {
    fs::create_dir_all(config.data_dir())?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("failed to initialise logging: {}", e))?;

    tracing::info!(
        "fetch-dogs {} starting against {}",
        env!("CARGO_PKG_VERSION"),
        config.api_url
    );
    Ok(())
}
