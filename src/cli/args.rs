//! Command-line argument parsing.
//!
//! Hand-rolled: the surface is a handful of flags. Unknown flags are
//! ignored; flags that need a value fail when it is missing or invalid.

use std::path::PathBuf;

use thiserror::Error;

/// Overrides collected from the command line. `None` keeps the value from
/// the environment or the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub base_url: Option<String>,
    pub data_path: Option<PathBuf>,
    pub port: Option<u16>,
    /// Run the mock endpoint inside the TUI process
    pub mock: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run only the mock metadata server
    Serve(CliOptions),
    /// Run the TUI application (default)
    RunTui(CliOptions),
}

#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid port: {0}")]
    InvalidPort(String),
}

/// Parse command-line arguments (including the program name).
///
/// ```
/// use region_selector::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["region-selector".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut serve = false;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, ArgsError> {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| ArgsError::MissingValue(name.to_string()))
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--serve" => serve = true,
            "--mock" => options.mock = true,
            "--base-url" => options.base_url = Some(value("--base-url")?),
            "--data" => options.data_path = Some(PathBuf::from(value("--data")?)),
            "--port" => {
                let raw = value("--port")?;
                let port = raw.parse().map_err(|_| ArgsError::InvalidPort(raw))?;
                options.port = Some(port);
            }
            _ => {}
        }
    }

    Ok(if serve {
        CliCommand::Serve(options)
    } else {
        CliCommand::RunTui(options)
    })
}
