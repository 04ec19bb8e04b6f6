//! Command-line interface: argument parsing and the version command.
//!
//! ```ignore
//! use region_selector::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Version => handle_version_command(),
//!     CliCommand::Serve(options) => { /* mock server only */ }
//!     CliCommand::RunTui(options) => { /* selector */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, CliOptions};
pub use version::{handle_version_command, version_line, VERSION};
