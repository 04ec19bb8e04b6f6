//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so its logs go to a file in the user cache
//! directory. The standalone mock server logs to stderr. `RUST_LOG`
//! overrides the default `info` level.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "region-selector.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Directory holding the log file.
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("region-selector")
}

/// Log to a file; returns the path written to.
pub fn init_file_logging() -> Result<PathBuf> {
    let dir = log_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| color_eyre::eyre::eyre!(err))?;
    Ok(path)
}

pub fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .compact()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| color_eyre::eyre::eyre!(err))?;
    Ok(())
}
