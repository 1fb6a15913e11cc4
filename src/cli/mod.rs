//! CLI module.
//!
//! Argument parsing plus the commands that run instead of the dashboard
//! (`--version`, `--help`).
//!
//! ```ignore
//! use trivia_insights::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::RunTui(options) => { /* start the dashboard */ }
//!     other => { /* print and exit */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions};
pub use version::{usage, version_line, VERSION};
