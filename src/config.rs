//! Runtime configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults,
//! `TRIVIA_*` environment variables, then command-line flags.

use std::time::Duration;

use crate::adapters::DEFAULT_TIMEOUT;
use crate::cli::CliOptions;
use crate::error::{TriviaError, TriviaResult};
use crate::opentdb::OPENTDB_BASE_URL;

/// Questions fetched per load.
pub const DEFAULT_AMOUNT: u32 = 50;
/// Questions shown before the list is expanded.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Terminal widths at or below this render in compact mode.
pub const DEFAULT_COMPACT_BREAKPOINT: u16 = 80;

pub const ENV_API_URL: &str = "TRIVIA_API_URL";
pub const ENV_AMOUNT: &str = "TRIVIA_AMOUNT";
pub const ENV_TIMEOUT_SECS: &str = "TRIVIA_TIMEOUT_SECS";
pub const ENV_PAGE_SIZE: &str = "TRIVIA_PAGE_SIZE";
pub const ENV_COMPACT_LIMIT: &str = "TRIVIA_COMPACT_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub amount: u32,
    pub request_timeout: Duration,
    pub page_size: usize,
    pub compact_breakpoint: u16,
    /// Maximum bars in the category chart in compact mode (`None` = all)
    pub compact_category_limit: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: OPENTDB_BASE_URL.to_string(),
            amount: DEFAULT_AMOUNT,
            request_timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
            compact_category_limit: None,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> TriviaResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| TriviaError::Config(format!("{} has an invalid value: {:?}", name, value)))
}

impl AppConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> TriviaResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> TriviaResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(value) = lookup(ENV_AMOUNT) {
            config.amount = parse_var(ENV_AMOUNT, &value)?;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout = Duration::from_secs(parse_var(ENV_TIMEOUT_SECS, &value)?);
        }
        if let Some(value) = lookup(ENV_PAGE_SIZE) {
            config.page_size = parse_var(ENV_PAGE_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_COMPACT_LIMIT) {
            config.compact_category_limit = Some(parse_var(ENV_COMPACT_LIMIT, &value)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Overlay command-line flags.
    pub fn apply_cli(&mut self, options: &CliOptions) -> TriviaResult<()> {
        if let Some(url) = &options.api_url {
            self.api_base_url = url.clone();
        }
        if let Some(amount) = options.amount {
            self.amount = amount;
        }
        if let Some(page_size) = options.page_size {
            self.page_size = page_size;
        }
        if let Some(secs) = options.timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        self.validate()
    }

    pub fn validate(&self) -> TriviaResult<()> {
        if self.amount == 0 {
            return Err(TriviaError::Config("amount must be positive".to_string()));
        }
        if self.page_size == 0 {
            return Err(TriviaError::Config("page size must be positive".to_string()));
        }
        if self.request_timeout.is_zero() {
            return Err(TriviaError::Config("timeout must be positive".to_string()));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(TriviaError::Config(format!(
                "API URL must start with http:// or https://, got {:?}",
                self.api_base_url
            )));
        }
        Ok(())
    }
}
