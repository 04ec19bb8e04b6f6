//! Process startup: configuration and logging.

pub mod config;
pub mod logging;

pub use config::{AppConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_DATA_PATH, DEFAULT_PORT};
pub use logging::{init_file_logging, init_stderr_logging, log_dir};
