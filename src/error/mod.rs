//! Error types for Trivia Insights.
//!
//! - [`NetworkError`]: transport and protocol failures of the question API
//! - [`TriviaError`]: the unified error returned by fallible operations
//! - [`TriviaResult`]: result alias over [`TriviaError`]
//!
//! None of these are shown to the user verbatim. A failed load surfaces as
//! [`LOAD_WARNING`] while the underlying error goes to the log.

mod network;

pub use network::NetworkError;

use thiserror::Error;

/// Fixed user-facing message for any failed load.
pub const LOAD_WARNING: &str = "Failed to load trivia questions. Please try again.";

/// Unified error type.
#[derive(Debug, Error)]
pub enum TriviaError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TriviaError {
    /// Intentional cancellation is not a failure and must not produce a warning.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, TriviaError::Network(NetworkError::Cancelled))
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TriviaError::Network(err) => err.error_code(),
            TriviaError::Payload(_) => "E_PAYLOAD",
            TriviaError::Io(_) => "E_IO",
            TriviaError::Config(_) => "E_CONFIG",
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            TriviaError::Network(err) => err.is_retryable(),
            _ => false,
        }
    }
}

/// Type alias for Results using TriviaError.
pub type TriviaResult<T> = Result<T, TriviaError>;
