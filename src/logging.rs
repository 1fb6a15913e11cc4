//! File logging.
//!
//! The dashboard owns the terminal, so `tracing` output goes to a file in
//! the user cache directory instead of stderr. The level filter comes from
//! `TRIVIA_LOG` (any `EnvFilter` directive), defaulting to `info`.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{TriviaError, TriviaResult};

pub const ENV_LOG: &str = "TRIVIA_LOG";
const DEFAULT_DIRECTIVE: &str = "info";
const LOG_DIR: &str = "trivia-insights";
const LOG_FILE: &str = "trivia-insights.log";

/// Where the log file lives, if the platform has a cache directory.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR).join(LOG_FILE))
}

/// Filter for a `TRIVIA_LOG` value. Unparseable directives fall back to
/// the default rather than silencing everything.
pub fn env_filter_from(value: Option<&str>) -> EnvFilter {
    value
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Open `path` for appending, creating its directory first.
pub fn open_log_file(path: &Path) -> TriviaResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global subscriber writing to [`log_file_path`].
///
/// Returns the path logged to, or `None` when there is no cache directory
/// (logging stays disabled).
pub fn init_logging() -> TriviaResult<Option<PathBuf>> {
    let Some(path) = log_file_path() else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter_from(std::env::var(ENV_LOG).ok().as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TriviaError::Config(format!("failed to install logger: {}", e)))?;

    Ok(Some(path))
}
