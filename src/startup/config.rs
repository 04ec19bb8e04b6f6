//! Runtime configuration.
//!
//! Defaults, then the environment, then command-line flags; the last one
//! that sets a value wins.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::cli::CliOptions;

/// Environment variable overriding the metadata base URL.
pub const BASE_URL_ENV: &str = "REGION_API_BASE_URL";

pub const DEFAULT_PORT: u16 = 3030;
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3030/api/v1";
pub const DEFAULT_DATA_PATH: &str = "mock-api/regions.json";

/// Configuration for the selector and the mock endpoint.
///
/// ```ignore
/// let config = AppConfig::from_env()
///     .with_port(4000)
///     .with_embedded_mock(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL the metadata path is appended to
    pub base_url: String,
    /// JSON file served by the mock endpoint
    pub data_path: PathBuf,
    /// Port of the mock endpoint
    pub port: u16,
    /// Start the mock endpoint next to the TUI
    pub embed_mock: bool,
    /// Whether `base_url` was set explicitly (env or flag)
    base_url_overridden: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            port: DEFAULT_PORT,
            embed_mock: false,
            base_url_overridden: false,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self.base_url_overridden = true;
        self
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the mock port. Without an explicit base URL the client follows
    /// the port so `--port` alone is enough to talk to the embedded mock.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        if !self.base_url_overridden {
            self.base_url = local_base_url(port);
        }
        self
    }

    pub fn with_embedded_mock(mut self, embed: bool) -> Self {
        self.embed_mock = embed;
        self
    }

    /// Defaults with `REGION_API_BASE_URL` applied.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_env_value(base_url: Option<String>) -> Self {
        match base_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::default().with_base_url(url),
            None => Self::default(),
        }
    }

    /// Apply command-line overrides.
    pub fn apply(mut self, options: &CliOptions) -> Self {
        if let Some(url) = &options.base_url {
            self = self.with_base_url(url.clone());
        }
        if let Some(path) = &options.data_path {
            self = self.with_data_path(path.clone());
        }
        if let Some(port) = options.port {
            self = self.with_port(port);
        }
        if options.mock {
            self = self.with_embedded_mock(true);
        }
        self
    }

    /// Address the mock endpoint binds to.
    pub fn mock_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port))
    }
}

fn local_base_url(port: u16) -> String {
    format!("http://127.0.0.1:{}/api/v1", port)
}
